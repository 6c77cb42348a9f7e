//! End-to-end tests for generated Java files.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::io::{self, Write};

use classgen_core::GeneratedFile;
use classgen_java::{
    ClassDefinition, ClassQualifier, FieldMember, GeneratorOptions, JavaFile, MethodDefinition,
    ResourceArrayMember, ResourceId, WARNING_HEADER, write_java_file,
};

/// Render a root class and return everything after the package preamble.
fn render_body(root: &ClassDefinition, package: &str) -> String {
    let mut out = Vec::new();
    write_java_file(root, package, true, &mut out).expect("write to Vec cannot fail");
    let text = String::from_utf8(out).expect("generated output is UTF-8");

    let preamble = format!("{WARNING_HEADER}package {package};\n\n");
    text.strip_prefix(&preamble)
        .expect("output starts with header and package")
        .to_string()
}

fn nested(name: &str) -> ClassDefinition {
    ClassDefinition::new(name, ClassQualifier::Static, false)
}

#[test]
fn test_nested_class_with_method() {
    let mut get_string = MethodDefinition::new("getString", "public String getString()");
    get_string.append_statement("return \"x\";");

    let mut string = nested("string");
    string.add_member(get_string);

    let mut root = ClassDefinition::new("R", ClassQualifier::None, false);
    root.add_member(string);

    assert_eq!(
        render_body(&root, "com.example"),
        "public final class R {\n\
         \x20 public static final class string {\n\
         \x20   public String getString() {\n\
         \x20     return \"x\";\n\
         \x20   }\n\
         \x20 }\n\
         }"
    );
}

#[test]
fn test_override_replaces_method_with_class() {
    let mut root = ClassDefinition::new("R", ClassQualifier::None, false);
    root.add_member(MethodDefinition::new("foo", "public void foo()"));
    root.add_member(FieldMember::resource_id("bar", ResourceId(0x7f010000)));

    let mut foo = nested("foo");
    foo.add_member(FieldMember::int("baz", 1));
    root.add_member(foo);

    let body = render_body(&root, "com.example");
    assert!(!body.contains("void foo()"));
    assert_eq!(
        body,
        "public final class R {\n\
         \x20 public static final int bar=0x7f010000;\n\
         \x20 public static final class foo {\n\
         \x20   public static final int baz=1;\n\
         \x20 }\n\
         }"
    );
}

#[test]
fn test_only_overridden_away_members_elides_class() {
    let mut inner = nested("inner");
    inner.add_member(FieldMember::int("x", 1));

    let mut root = ClassDefinition::new("R", ClassQualifier::None, false);
    root.add_member(inner);
    root.add_member(nested("inner"));

    assert_eq!(render_body(&root, "p"), "");
}

#[test]
fn test_indentation_follows_brace_depth() {
    let mut method = MethodDefinition::new("run", "public static void run()");
    method.append_statement("int a = 1;");
    method.append_statement("int b = a;");

    let mut level3 = nested("c");
    level3.add_member(method);
    level3.add_member(FieldMember::int("deep", 3));
    let mut level2 = nested("b");
    level2.add_member(level3);
    level2.add_member(FieldMember::int("mid", 2));
    let mut level1 = nested("a");
    level1.add_member(level2);
    let mut root = ClassDefinition::new("R", ClassQualifier::None, false);
    root.add_member(level1);
    root.add_member(FieldMember::int("top", 1));

    let body = render_body(&root, "p");
    let mut depth = 0usize;
    for line in body.lines().filter(|l| !l.is_empty()) {
        let trimmed = line.trim_start();
        if trimmed.starts_with('}') {
            depth = depth.checked_sub(1).expect("unbalanced closing brace");
        }
        assert_eq!(line.len() - trimmed.len(), depth * 2, "line: {line:?}");
        if trimmed.ends_with('{') {
            depth += 1;
        }
    }
    assert_eq!(depth, 0);
}

#[test]
fn test_resource_class_snapshot() {
    let mut attr = nested("attr");
    let mut color_accent = FieldMember::resource_id("colorAccent", ResourceId(0x7f010000));
    color_accent
        .comment_builder()
        .append_comment("Accent color.\n@SystemApi");
    attr.add_member(color_accent);

    let mut drawable = nested("drawable");
    drawable.add_member(FieldMember::resource_id("icon", ResourceId(0x7f020000)));

    let mut string = nested("string");
    let mut app_name = FieldMember::resource_id("app_name", ResourceId(0x7f030000));
    app_name
        .comment_builder()
        .append_comment("@deprecated use title");
    string.add_member(app_name);

    let mut styleable = nested("styleable");
    let mut my_view = ResourceArrayMember::new("MyView");
    my_view
        .add_element(ResourceId(0x7f010000))
        .add_element(ResourceId(0x7f010001));
    styleable.add_member(my_view);
    styleable.add_member(FieldMember::int("MyView_colorAccent", 0));
    styleable.add_member(FieldMember::int("MyView_other", 1));

    let mut root = ClassDefinition::new("R", ClassQualifier::None, false);
    root.add_member(attr);
    root.add_member(drawable);
    root.add_member(string);
    root.add_member(styleable);

    let mut out = Vec::new();
    write_java_file(&root, "com.example.app", true, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    insta::assert_snapshot!("resource_class", output);
}

#[test]
fn test_sink_error_is_returned_unchanged() {
    struct Full;
    impl Write for Full {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::StorageFull, "no space"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    let root = ClassDefinition::new("R", ClassQualifier::None, true);
    let err = write_java_file(&root, "p", true, &mut Full).unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::StorageFull);
    assert_eq!(err.to_string(), "no space");
}

#[test]
fn test_java_file_written_to_package_dir() {
    let temp = tempfile::TempDir::new().unwrap();

    let mut root = ClassDefinition::new("R", ClassQualifier::None, false);
    root.add_member(FieldMember::string("PACKAGE", "com.example.app"));
    let options = GeneratorOptions::default().use_final(false);

    let path = JavaFile::new(&root, "com.example.app")
        .options(options)
        .write(temp.path())
        .unwrap();

    assert_eq!(
        path,
        temp.path().join("com").join("example").join("app").join("R.java")
    );
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(WARNING_HEADER));
    assert!(content.ends_with(
        "public final class R {\n  public static String PACKAGE=\"com.example.app\";\n}"
    ));
}
