#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ErrorKind;

fn parse(input: &str) -> Result<Document, TomlError> {
    Parser::new(input).parse_document()
}

fn parse_strict(input: &str) -> Result<Document, TomlError> {
    Parser::with_options(input, ParseOptions::strict()).parse_document()
}

#[test]
fn test_parser_basic_document() {
    let input = r#"
name = "demo"
version = 1

[server]
port = 8080
host = "localhost"
"#;

    let doc = parse(input).expect("Failed to parse document");

    println!("--- Parsed Document ---");
    println!("{:#?}", doc);

    assert_eq!(doc.get_global("name"), Some(&Value::String("demo".into())));
    assert_eq!(doc.get_global("version"), Some(&Value::Integer(1)));
    assert_eq!(doc.section("server").get("port"), Some(&Value::Integer(8080)));
    assert_eq!(
        doc.section("server").get("host"),
        Some(&Value::String("localhost".into()))
    );
}

#[test]
fn test_reopened_section_merges() {
    let doc = parse("[a]\nx=1\n[a]\ny=2").expect("Failed to parse document");

    let a = doc.section("a");
    assert_eq!(a.get("x"), Some(&Value::Integer(1)));
    assert_eq!(a.get("y"), Some(&Value::Integer(2)));
    assert_eq!(doc.section_names().count(), 1);
}

#[test]
fn test_reopened_section_does_not_leak_into_other_sections() {
    let doc = parse("[a]\nx=1\n[b]\nz=3\n[a]\ny=2").unwrap();
    assert_eq!(doc.section("b").keys().collect::<Vec<_>>(), vec!["z"]);
    assert_eq!(doc.section("a").keys().collect::<Vec<_>>(), vec!["x", "y"]);
}

#[test]
fn test_last_write_wins() {
    let doc = parse("mode = \"fast\"\nmode = \"slow\"\n[s]\nk = 1\nk = 2.5").unwrap();
    assert_eq!(doc.get_global("mode"), Some(&Value::String("slow".into())));
    assert_eq!(doc.section("s").get("k"), Some(&Value::Float(2.5)));
}

#[test]
fn test_globals_are_not_visible_in_sections() {
    let doc = parse("title = \"x\"\n[one]\na = 1\n[two]\nb = 2").unwrap();
    assert!(doc.get_global("title").is_some());
    for view in doc.sections() {
        assert_eq!(view.get("title"), None);
    }
    // keys after a header belong to that header only
    assert_eq!(doc.get_global("a"), None);
}

#[test]
fn test_missing_section_reports_absence() {
    let doc = parse("[present]\nk = 1").unwrap();
    let view = doc.section("absent");
    assert_eq!(view.get("k"), None);
    assert_eq!(view.get(""), None);
    assert!(!view.exists());
}

#[test]
fn test_empty_sections_are_kept() {
    let doc = parse("[first]\n[second]\nk = 1\n[last]").unwrap();
    assert!(doc.has_section("first"));
    assert!(doc.section("first").is_empty());
    assert!(doc.has_section("last"));
    assert_eq!(
        doc.section_names().collect::<Vec<_>>(),
        vec!["first", "second", "last"]
    );
}

#[test]
fn test_value_coercion() {
    let input = r#"
a = 42
b = -7
c = +3
d = 3.14
e = 1e10
f = -2.5E-3
g = .5
h = 1.
i = "hello"
j = 'single'
k = ""
l = "it's"
"#;
    let doc = parse(input).unwrap();

    assert_eq!(doc.get_global("a"), Some(&Value::Integer(42)));
    assert_eq!(doc.get_global("b"), Some(&Value::Integer(-7)));
    assert_eq!(doc.get_global("c"), Some(&Value::Integer(3)));
    assert_eq!(doc.get_global("d"), Some(&Value::Float(3.14)));
    assert_eq!(doc.get_global("e"), Some(&Value::Float(1e10)));
    assert_eq!(doc.get_global("f"), Some(&Value::Float(-2.5e-3)));
    assert_eq!(doc.get_global("g"), Some(&Value::Float(0.5)));
    assert_eq!(doc.get_global("h"), Some(&Value::Float(1.0)));
    assert_eq!(doc.get_global("i"), Some(&Value::String("hello".into())));
    assert_eq!(doc.get_global("j"), Some(&Value::String("single".into())));
    assert_eq!(doc.get_global("k"), Some(&Value::String(String::new())));
    assert_eq!(doc.get_global("l"), Some(&Value::String("it's".into())));
}

#[test]
fn test_quoted_numbers_stay_strings() {
    let doc = parse("port = \"8080\"\nflag = 'true'").unwrap();
    assert_eq!(doc.get_global("port"), Some(&Value::String("8080".into())));
    assert_eq!(doc.get_global("flag"), Some(&Value::String("true".into())));
}

#[test]
fn test_quoted_string_is_verbatim() {
    let doc = parse(r#"path = "C:\temp\new"  # windows"#).unwrap();
    assert_eq!(
        doc.get_global("path"),
        Some(&Value::String(r"C:\temp\new".into()))
    );
}

#[test]
fn test_bare_strings_accepted_by_default() {
    let doc = parse("enable_logging = true\nlevel = info # inline\nversion = 1.2.3\nempty =").unwrap();
    assert_eq!(doc.get_global("enable_logging"), Some(&Value::String("true".into())));
    assert_eq!(doc.get_global("level"), Some(&Value::String("info".into())));
    assert_eq!(doc.get_global("version"), Some(&Value::String("1.2.3".into())));
    assert_eq!(doc.get_global("empty"), Some(&Value::String(String::new())));
}

#[test]
fn test_bare_strings_rejected_in_strict_mode() {
    let err = parse_strict("a = 1\nlevel = info").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnrecognizedValue);
    assert_eq!(err.line(), Some(2));

    let doc = parse_strict("a = 1\nb = 2.0\nc = \"x\"").unwrap();
    assert_eq!(doc.globals().len(), 3);
}

#[test]
fn test_unterminated_quote() {
    let err = parse("ok = 1\nname = \"abc").unwrap_err();
    assert!(matches!(err, TomlError::UnterminatedQuote { quote: '"', line: 2, .. }));

    let err = parse("name = 'abc # comment").unwrap_err();
    assert!(matches!(err, TomlError::UnterminatedQuote { quote: '\'', line: 1, .. }));
}

#[test]
fn test_text_after_closing_quote_is_rejected() {
    let err = parse(r#"name = "a"b""#).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnrecognizedValue);
    assert_eq!(err.line(), Some(1));
}

#[test]
fn test_integer_overflow_is_rejected() {
    let err = parse("big = 99999999999999999999").unwrap_err();
    assert!(matches!(err, TomlError::UnrecognizedValue { line: 1, code: Some(107), .. }));

    let doc = parse("max = 9223372036854775807\nmin = -9223372036854775808").unwrap();
    assert_eq!(doc.get_global("max"), Some(&Value::Integer(i64::MAX)));
    assert_eq!(doc.get_global("min"), Some(&Value::Integer(i64::MIN)));
}

#[test]
fn test_malformed_input_reports_kind_and_line() {
    let err = parse("bad line without equals").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedKeyValue);
    assert_eq!(err.line(), Some(1));

    let err = parse("[unclosed").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedSectionHeader);
    assert_eq!(err.line(), Some(1));

    let err = parse("# header\n\na = 1\n[ok]\nb = 2\n[]\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedSectionHeader);
    assert_eq!(err.line(), Some(6));
}

#[test]
fn test_error_after_valid_lines_returns_no_document() {
    let result = parse("a = 1\n[s]\nb = 2\nnot valid");
    assert!(result.is_err());
    assert_eq!(result.unwrap_err().line(), Some(4));
}

#[test]
fn test_comments_and_blank_lines_are_ignored() {
    let input = "\n   \n# only comments\n\t# indented comment\n";
    let doc = parse(input).unwrap();
    assert!(doc.is_empty());
    assert!(parse("").unwrap().is_empty());
}

#[test]
fn test_crlf_document() {
    let doc = parse("name = \"demo\"\r\n[server]\r\nport = 8080\r\n").unwrap();
    assert_eq!(doc.get_global("name"), Some(&Value::String("demo".into())));
    assert_eq!(doc.section("server").get("port"), Some(&Value::Integer(8080)));
}

#[test]
fn test_reparse_is_deterministic() {
    let input = "t = 1\n[a]\nx = 'y'\n[b]\nz = 0.25\n[a]\nw = 2";
    let first = parse(input).unwrap();
    let second = parse(input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_dotted_section_name_is_flat() {
    let doc = parse("[server.tls]\nenabled = yes").unwrap();
    assert_eq!(
        doc.section("server.tls").get("enabled"),
        Some(&Value::String("yes".into()))
    );
    assert!(!doc.has_section("server"));
}

#[test]
fn test_parse_single_value() {
    let parser = Parser::new("");
    assert_eq!(parser.parse_value("12", 1), Ok(Value::Integer(12)));
    assert_eq!(parser.parse_value("'x'", 1), Ok(Value::String("x".into())));

    let strict = Parser::with_options("", ParseOptions::strict());
    let err = strict.parse_value("word", 7).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnrecognizedValue);
    assert_eq!(err.line(), Some(7));

    let err = parser.parse_value("\"open", 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnterminatedQuote);
    assert_eq!(err.line(), Some(3));
}
