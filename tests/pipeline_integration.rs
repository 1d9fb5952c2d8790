//! Integration tests for the build and check pipelines.
//!
//! These tests write small source and translation collections into a
//! temporary project, run the engine against it, and inspect the artifacts.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use versealign::core::artifact::schema::VerseRecord;
use versealign::core::config::GlobalConfigSource;
use versealign::core::artifact::store::{read_records, write_records};
use versealign::core::loader::LoadError;
use versealign::core::types::{LineRange, VerseId};
use versealign::core::verify::{AlignmentError, Inconsistency};
use versealign::engine::{self, BuildOptions, CheckOptions, Context};

// =============================================================================
// Test Fixtures
// =============================================================================

const LATIN_BOOK_1: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<TEI.2>
  <teiHeader><fileDesc><titleStmt><title>Aeneid</title></titleStmt></fileDesc></teiHeader>
  <text><body>
    <div1 type="book" n="1">
      <milestone unit="card" n="1"/>
      <l>Arma virumque cano, Troiae qui primus ab oris</l>
      <l>Italiam, fato profugus, Laviniaque venit</l>
      <l>litora, multum ille et terris iactatus et alto</l>
      <l>vi superum saevae memorem Iunonis ob iram;</l>
      <milestone unit="card" n="5"/>
      <l>multa quoque et bello passus, dum conderet urbem,</l>
      <milestone unit="para"/>
      <l>inferretque deos Latio, genus unde Latinum,</l>
      <l>Albanique patres, atque altae moenia Romae.</l>
    </div1>
  </body></text>
</TEI.2>"#;

const LATIN_BOOK_2: &str = r#"<TEI.2><text><body>
    <div1 type="book" n="2">
      <milestone unit="card" n="1"/>
      <l>Conticuere omnes, intentique ora tenebant;</l>
      <l>inde toro pater Aeneas sic orsus ab alto:</l>
    </div1>
</body></text></TEI.2>"#;

const DRYDEN_BOOK_1: &str = r#"<TEI.2><text><body>
    <div1 type="book" n="1">
      <milestone unit="card" n="1"/>
      <l>Arms, and the man I sing, who, forc'd by fate,</l>
      <l>And haughty Juno's unrelenting hate,</l>
      <l>Expell'd and exil'd, left the Trojan shore.</l>
      <milestone unit="card" n="4"/>
      <l>Long labors, both by sea and land, he bore,</l>
      <l>And in the doubtful war, before he won</l>
      <l>The Latian realm, and built the destin'd town;</l>
      <l>His banish'd gods restor'd to rites divine,</l>
    </div1>
</body></text></TEI.2>"#;

const DRYDEN_BOOK_2: &str = r#"<TEI.2><text><body>
    <div1 type="book" n="2">
      <l>All were attentive to the godlike man,</l>
      <l>When from his lofty couch he thus began:</l>
      <l>"Great queen, what you command me to relate</l>
    </div1>
</body></text></TEI.2>"#;

/// A temporary project with both collections in the default locations.
struct TestProject {
    dir: TempDir,
}

impl TestProject {
    fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let project = Self { dir };
        project.write("resources/latin/book01.xml", LATIN_BOOK_1);
        project.write("resources/latin/book02.xml", LATIN_BOOK_2);
        project.write("resources/dryden/book01.xml", DRYDEN_BOOK_1);
        project.write("resources/dryden/book02.xml", DRYDEN_BOOK_2);
        project
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, relative: &str, contents: &str) {
        let path = self.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).expect("create dirs");
        fs::write(path, contents).expect("write fixture");
    }

    /// Context for this project that ignores any user-level config.
    fn context(&self) -> Context {
        Context {
            cwd: Some(self.path().to_path_buf()),
            debug: false,
            quiet: true,
            global_config: GlobalConfigSource::Disabled,
        }
    }

    fn records(&self, relative: &str) -> Vec<VerseRecord> {
        read_records(&self.path().join(relative)).expect("read artifact")
    }
}

fn range(start: u32, end: u32) -> LineRange {
    LineRange::new(start, end).unwrap()
}

fn ids(record: &VerseRecord) -> Vec<&str> {
    record.corresponding_ids.iter().map(VerseId::as_str).collect()
}

// =============================================================================
// Build
// =============================================================================

#[test]
fn build_writes_both_artifacts() {
    let project = TestProject::new();

    let report = engine::build(&project.context(), &BuildOptions::default()).unwrap();

    assert_eq!(report.source_verses, 3);
    assert_eq!(report.translation_verses, 3);
    assert_eq!(report.source_output, project.path().join("latin_verses.json"));
    assert!(report.source_output.exists());
    assert!(report.translation_output.exists());
}

#[test]
fn build_segments_and_links_verses() {
    let project = TestProject::new();
    engine::build(&project.context(), &BuildOptions::default()).unwrap();

    let latin = project.records("latin_verses.json");
    let english = project.records("english_verses.json");

    // Book 1: Latin 1-4, 5-7; Book 2: 1-2.
    let latin_ranges: Vec<_> = latin.iter().map(|r| (r.book, r.line_numbers)).collect();
    assert_eq!(
        latin_ranges,
        vec![(1, range(1, 4)), (1, range(5, 7)), (2, range(1, 2))]
    );

    // Book 1: English 1-3, 4-7; Book 2 has no cards and starts at line 1.
    let english_ranges: Vec<_> = english.iter().map(|r| (r.book, r.line_numbers)).collect();
    assert_eq!(
        english_ranges,
        vec![(1, range(1, 3)), (1, range(4, 7)), (2, range(1, 3))]
    );

    assert_eq!(ids(&latin[0]), vec!["E0", "E1"]);
    assert_eq!(ids(&latin[1]), vec!["E1"]);
    assert_eq!(ids(&latin[2]), vec!["E2"]);
    assert_eq!(ids(&english[1]), vec!["L0", "L1"]);

    assert_eq!(
        latin[1].paragraphs,
        vec![
            vec!["multa quoque et bello passus, dum conderet urbem,"],
            vec![
                "inferretque deos Latio, genus unde Latinum,",
                "Albanique patres, atque altae moenia Romae.",
            ],
        ]
    );
}

#[test]
fn build_honors_project_config() {
    let project = TestProject::new();
    project.write(
        "versealign.toml",
        r#"
        [source]
        output = "out/lat.json"
        id_prefix = "lat"

        [translation]
        output = "out/eng.json"
        id_prefix = "eng"
        "#,
    );

    engine::build(&project.context(), &BuildOptions::default()).unwrap();

    let latin = project.records("out/lat.json");
    assert_eq!(latin[0].id.as_str(), "lat0");
    assert_eq!(ids(&latin[0]), vec!["eng0", "eng1"]);
}

#[test]
fn build_reads_injected_global_config() {
    let project = TestProject::new();
    project.write("user/config.toml", "[translation]\noutput = \"user_english.json\"\n");

    let ctx = Context {
        global_config: GlobalConfigSource::File(project.path().join("user/config.toml")),
        ..project.context()
    };
    engine::build(&ctx, &BuildOptions::default()).unwrap();

    assert!(project.path().join("user_english.json").exists());
    assert!(!project.path().join("english_verses.json").exists());
}

#[test]
fn build_overrides_take_precedence() {
    let project = TestProject::new();
    fs::rename(
        project.path().join("resources/dryden"),
        project.path().join("english"),
    )
    .unwrap();

    let options = BuildOptions {
        translation_dir: Some("english".into()),
        source_out: Some("a.json".into()),
        ..Default::default()
    };
    engine::build(&project.context(), &options).unwrap();

    assert!(project.path().join("a.json").exists());
    assert!(project.path().join("english_verses.json").exists());
}

#[test]
fn build_fails_on_document_without_book() {
    let project = TestProject::new();
    project.write("resources/dryden/book03.xml", "<TEI.2><text/></TEI.2>");

    let err = engine::build(&project.context(), &BuildOptions::default()).unwrap_err();

    let load = err.downcast_ref::<LoadError>().expect("load error");
    assert!(matches!(load, LoadError::MissingBook(_)));
    assert!(!project.path().join("latin_verses.json").exists());
}

#[test]
fn build_fails_on_missing_collection() {
    let project = TestProject::new();
    fs::remove_dir_all(project.path().join("resources/latin")).unwrap();

    let err = engine::build(&project.context(), &BuildOptions::default()).unwrap_err();
    assert!(matches!(
        err.downcast_ref::<LoadError>(),
        Some(LoadError::ReadDir { .. })
    ));
}

// =============================================================================
// Check
// =============================================================================

#[test]
fn check_accepts_fresh_build() {
    let project = TestProject::new();
    let built = engine::build(&project.context(), &BuildOptions::default()).unwrap();

    let report = engine::check(&project.context(), &CheckOptions::default()).unwrap();

    assert_eq!(report.source_verses, built.source_verses);
    assert_eq!(report.translation_verses, built.translation_verses);
    assert_eq!(report.links, built.links);
    assert_eq!(report.skipped_links, 0);
}

#[test]
fn check_skips_dangling_ids() {
    let project = TestProject::new();
    engine::build(&project.context(), &BuildOptions::default()).unwrap();

    let path = project.path().join("latin_verses.json");
    let mut latin = read_records(&path).unwrap();
    latin[0]
        .corresponding_ids
        .push(VerseId::parse("E404").unwrap());
    write_records(&path, &latin).unwrap();

    let report = engine::check(&project.context(), &CheckOptions::default()).unwrap();
    assert_eq!(report.skipped_links, 1);
}

#[test]
fn check_rejects_non_overlapping_link() {
    let project = TestProject::new();
    engine::build(&project.context(), &BuildOptions::default()).unwrap();

    // Latin 1:5-7 and English 1:1-3 share no line.
    let path = project.path().join("latin_verses.json");
    let mut latin = read_records(&path).unwrap();
    latin[1].corresponding_ids.push(VerseId::parse("E0").unwrap());
    write_records(&path, &latin).unwrap();

    let err = engine::check(&project.context(), &CheckOptions::default()).unwrap_err();
    let alignment = err.downcast_ref::<AlignmentError>().expect("alignment error");

    assert_eq!(alignment.reason, Inconsistency::Disjoint);
    assert_eq!(alignment.source_lines, range(5, 7));
    assert_eq!(alignment.translation_lines, range(1, 3));
}

#[test]
fn check_with_explicit_paths() {
    let project = TestProject::new();
    let options = BuildOptions {
        source_out: Some("x/l.json".into()),
        translation_out: Some("x/e.json".into()),
        ..Default::default()
    };
    engine::build(&project.context(), &options).unwrap();

    let check = CheckOptions {
        source: Some("x/l.json".into()),
        translation: Some("x/e.json".into()),
    };
    assert!(engine::check(&project.context(), &check).is_ok());
    assert!(engine::check(&project.context(), &CheckOptions::default()).is_err());
}

// =============================================================================
// Round-trip
// =============================================================================

#[test]
fn reload_matches_built_text() {
    let project = TestProject::new();
    let ctx = project.context();
    engine::build(&ctx, &BuildOptions::default()).unwrap();

    let built = engine::build_parallel_text(
        &project.path().join("resources/latin"),
        &project.path().join("resources/dryden"),
        "xml",
        ctx.verbosity(),
    )
    .unwrap();

    let (reloaded, report) = engine::load_parallel_text(
        &project.path().join("latin_verses.json"),
        &project.path().join("english_verses.json"),
    )
    .unwrap();

    assert_eq!(reloaded, built);
    assert_eq!(report.skipped_links, 0);
}

#[test]
fn build_rejects_shared_output_path() {
    let project = TestProject::new();
    let options = BuildOptions {
        source_out: Some("same.json".into()),
        translation_out: Some("same.json".into()),
        ..Default::default()
    };

    let err = engine::build(&project.context(), &options).unwrap_err();
    assert!(err.to_string().contains("same.json"));
    assert!(!project.path().join("same.json").exists());
}

#[test]
fn failed_build_keeps_previous_artifacts() {
    let project = TestProject::new();
    engine::build(&project.context(), &BuildOptions::default()).unwrap();
    let before = fs::read_to_string(project.path().join("latin_verses.json")).unwrap();

    // The translation artifact cannot be created under a regular file.
    project.write("blocked", "");
    project.write(
        "resources/latin/book03.xml",
        r#"<div1 n="3"><l>Urbs antiqua fuit</l></div1>"#,
    );
    let options = BuildOptions {
        translation_out: Some("blocked/english.json".into()),
        ..Default::default()
    };
    assert!(engine::build(&project.context(), &options).is_err());

    let after = fs::read_to_string(project.path().join("latin_verses.json")).unwrap();
    assert_eq!(after, before);
    assert!(!project.path().join("latin_verses.json.tmp").exists());
}
