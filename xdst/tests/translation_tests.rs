use indoc::indoc;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use xdst::{Error, RootConfig, TranslateOptions, Translator};

const CONFIG: &str = indoc! {r#"
    rootPath: "."
    translations:
      - from:
          - source1.xml
          - source.strings
        to:
          - target1.xml
      - from:
          - source.strings
        to:
          - target2.xml
          - target.strings
"#};

const SOURCE_XML: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <resources>
    	<string name="first_test">This should be transferred</string>
    	<string name="new_string_in_here">a new string in here</string>
    	<string name="taifun_build">a build-in storm</string>
    </resources>
"#};

const SOURCE_STRINGS: &str = indoc! {r#"
    /* shared with the iOS app */
    "first_test" = "This will not be transferred to target1";
    "second test" = "Hello World";
"#};

const TARGET1_XML: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <resources>
    	<string name="first_test">old</string>
    	<string name="second test">old</string>
    	<string name="new_string_in_here">old</string>
    	<string name="taifun_build">old</string>
    </resources>
"#};

const TARGET2_XML: &str = indoc! {r#"
    <?xml version="1.0" encoding="UTF-8"?>
    <resources>
    	<string name="first_test">old</string>
    	<string name="second test">old</string>
    	<string name="new_string_in_here">an old string in here</string>
    	<string name="taifun_build">so far all is quiet</string>
    </resources>
"#};

const TARGET_STRINGS: &str =
    "\"first_test\" = \"old\";\n\"second test\" = \"\";\n\"some_string\" = \"some Text !\";";

fn write_test_set(root: &Path) {
    fs::write(root.join("XMLDotStringConfig.yaml"), CONFIG).unwrap();
    fs::write(root.join("source1.xml"), SOURCE_XML).unwrap();
    fs::write(root.join("source.strings"), SOURCE_STRINGS).unwrap();
    fs::write(root.join("target1.xml"), TARGET1_XML).unwrap();
    fs::write(root.join("target2.xml"), TARGET2_XML).unwrap();
    fs::write(root.join("target.strings"), TARGET_STRINGS).unwrap();
}

fn run(root: &Path, add_new_entries: bool) -> Result<Vec<xdst::JobReport>, Error> {
    let config = RootConfig::load(root.join("XMLDotStringConfig.yaml"))?;
    let options = TranslateOptions::new().with_add_new_entries(add_new_entries);
    Translator::new(config, options).run()
}

#[test]
fn test_first_translation_updates_xml_target() {
    let temp_dir = TempDir::new().unwrap();
    write_test_set(temp_dir.path());

    run(temp_dir.path(), false).unwrap();

    let expected = indoc! {r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <resources>
            <string name="first_test">This should be transferred</string>
            <string name="second test">Hello World</string>
            <string name="new_string_in_here">a new string in here</string>
            <string name="taifun_build">a build-in storm</string>
        </resources>"#};
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("target1.xml")).unwrap(),
        expected
    );
}

#[test]
fn test_second_translation_keeps_unmatched_xml_entries() {
    let temp_dir = TempDir::new().unwrap();
    write_test_set(temp_dir.path());

    run(temp_dir.path(), false).unwrap();

    let expected = indoc! {r#"
        <?xml version="1.0" encoding="UTF-8"?>
        <resources>
            <string name="first_test">This will not be transferred to target1</string>
            <string name="second test">Hello World</string>
            <string name="new_string_in_here">an old string in here</string>
            <string name="taifun_build">so far all is quiet</string>
        </resources>"#};
    assert_eq!(
        fs::read_to_string(temp_dir.path().join("target2.xml")).unwrap(),
        expected
    );
}

#[test]
fn test_second_translation_updates_strings_target() {
    let temp_dir = TempDir::new().unwrap();
    write_test_set(temp_dir.path());

    let reports = run(temp_dir.path(), false).unwrap();

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("target.strings")).unwrap(),
        "\"first_test\" = \"This will not be transferred to target1\";\n\
         \"second test\" = \"Hello World\";\n\
         \"some_string\" = \"some Text !\";"
    );

    assert_eq!(reports.len(), 2);
    let tracker = &reports[1].tracker;
    assert!(tracker.unmoved("target.strings").unwrap().contains("some_string"));
    assert!(tracker.unmoved("target2.xml").unwrap().contains("taifun_build"));
    assert!(tracker.read("source1.xml").is_none());
}

#[test]
fn test_add_new_entries_appends_to_every_target() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_test_set(root);
    fs::write(
        root.join("source.strings"),
        "\"brand_new\" = \"fresh\";\n\"second test\" = \"Hello World\";\n",
    )
    .unwrap();

    let reports = run(root, true).unwrap();

    let target_strings = fs::read_to_string(root.join("target.strings")).unwrap();
    assert!(target_strings.ends_with("\n\"brand_new\" = \"fresh\";"));
    let target2 = fs::read_to_string(root.join("target2.xml")).unwrap();
    assert!(target2.ends_with(
        "    <string name=\"brand_new\">fresh</string>\n</resources>"
    ));
    assert!(reports[1].tracker.moved("target2.xml").unwrap().contains("brand_new"));
}

#[test]
fn test_invalid_destination_leaves_every_file_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_test_set(root);
    fs::write(
        root.join("XMLDotStringConfig.yaml"),
        format!("{}  - from: [source.strings]\n    to: [target.json]\n", CONFIG),
    )
    .unwrap();

    let err = run(root, false).unwrap_err();
    assert!(matches!(err, Error::IllegalConfig(_)));
    assert_eq!(fs::read_to_string(root.join("target1.xml")).unwrap(), TARGET1_XML);
    assert_eq!(
        fs::read_to_string(root.join("target.strings")).unwrap(),
        TARGET_STRINGS
    );
}

#[test]
fn test_second_run_is_stable() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    write_test_set(root);

    run(root, true).unwrap();
    let first = fs::read_to_string(root.join("target2.xml")).unwrap();
    run(root, true).unwrap();
    assert_eq!(fs::read_to_string(root.join("target2.xml")).unwrap(), first);
}
