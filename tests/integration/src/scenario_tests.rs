//! Whole-stack scenarios: catalogue on disk, configuration file on disk,
//! sources fed through a session.

use pretty_assertions::assert_eq;
use qauto_blocks::find_group;
use qauto_core::{
    AnalysisState, ApproveAll, ConfigDocument, FixedSelection, Selection, Session, apply_changes,
};
use qauto_fs::NormalizedPath;
use qauto_meta::{FixMode, SessionSettings};
use qauto_test_utils::{TestProject, quasar_conf};
use rstest::rstest;

fn open(project: &TestProject, fix_mode: FixMode, sort: bool) -> Session {
    Session::open(
        &NormalizedPath::new(project.catalogue_dir()),
        &NormalizedPath::new(project.config_path()),
        SessionSettings { fix_mode, sort },
    )
    .unwrap()
}

fn declared(project: &TestProject, group: &str) -> Vec<String> {
    find_group(&project.read_config(), group)
        .unwrap()
        .map(|literal| literal.items)
        .unwrap_or_default()
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_single_component_is_appended_after_existing() {
    let project = TestProject::new()
        .with_component("MyButton")
        .with_config("export default {\n  components: [ 'Other' ]\n}\n");
    let mut session = open(&project, FixMode::Automatic, false);

    session.analyse("<template><my-button>Go</my-button></template>");

    assert_eq!(session.state().missing_in("components"), names(&["MyButton"]));
    assert_eq!(session.state().merged_in("components"), names(&["Other", "MyButton"]));

    let report = session.complete_pass(&ApproveAll, &mut Vec::new()).await;

    assert!(report.written);
    assert_eq!(declared(&project, "components"), names(&["Other", "MyButton"]));
}

#[tokio::test]
async fn test_sorted_output_ignores_discovery_order() {
    let project = TestProject::new()
        .with_component("QBtn")
        .with_component("QToolbar")
        .with_component("QAvatar")
        .with_config(&quasar_conf(&["QToolbar"], &[], &[]));
    let mut session = open(&project, FixMode::Automatic, true);

    session.analyse("<q-toolbar><q-btn /></q-toolbar>");
    session.analyse("<q-avatar size=\"24px\" />");
    session.complete_pass(&ApproveAll, &mut Vec::new()).await;

    assert_eq!(
        declared(&project, "components"),
        names(&["QAvatar", "QBtn", "QToolbar"])
    );
}

#[tokio::test]
async fn test_declined_item_resurfaces_next_pass() {
    let project = TestProject::new()
        .with_component("QBtn")
        .with_component("QCard")
        .with_component("QInput")
        .with_config(&quasar_conf(&["QBtn"], &[], &[]));
    let source = "<q-card><q-input v-model=\"text\" /><q-btn /></q-card>";
    let mut session = open(&project, FixMode::Manual, true);

    session.analyse(source);
    session
        .complete_pass(&FixedSelection::new(["QInput"]), &mut Vec::new())
        .await;

    assert_eq!(declared(&project, "components"), names(&["QBtn", "QInput"]));

    session.analyse(source);
    assert_eq!(session.state().existing_in("components"), names(&["QBtn", "QInput"]));
    assert_eq!(session.state().missing_in("components"), names(&["QCard"]));
}

#[test]
fn test_applying_twice_writes_once() {
    let project = TestProject::new().with_config(&quasar_conf(&["QBtn"], &[], &[]));
    let mut document = ConfigDocument::load(&NormalizedPath::new(project.config_path())).unwrap();
    let mut state = AnalysisState::new();
    state.record("components", &document.declared("components"), &names(&["QCard"]));

    let first = apply_changes(&mut document, &state, &Selection::All, true).unwrap();
    let second = apply_changes(&mut document, &state, &Selection::All, true).unwrap();

    assert!(first.written);
    assert!(!second.written);
    assert_eq!(declared(&project, "components"), names(&["QBtn", "QCard"]));
}

#[rstest]
#[case::sorted(true, &["QBtn", "QCard", "QInput"])]
#[case::insertion_order(false, &["QInput", "QBtn", "QCard"])]
fn test_patched_literal_reads_back(#[case] sort: bool, #[case] expected: &[&str]) {
    let project = TestProject::new().with_config(&quasar_conf(&["QInput"], &[], &[]));
    let mut document = ConfigDocument::load(&NormalizedPath::new(project.config_path())).unwrap();
    let mut state = AnalysisState::new();
    state.record("components", &document.declared("components"), &names(&["QBtn", "QCard"]));

    apply_changes(&mut document, &state, &Selection::All, sort).unwrap();

    assert_eq!(declared(&project, "components"), names(expected));
    assert_eq!(document.declared("components"), names(expected));
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let first = TestProject::new()
        .with_component("QBtn")
        .with_config(&quasar_conf(&[], &[], &[]));
    let second = TestProject::new()
        .with_component("QBtn")
        .with_config(&quasar_conf(&[], &[], &[]));
    let mut a = open(&first, FixMode::Automatic, true);
    let mut b = open(&second, FixMode::Warn, true);

    a.analyse("<q-btn />");
    b.analyse("<q-btn />");
    a.complete_pass(&ApproveAll, &mut Vec::new()).await;
    let report = b.complete_pass(&ApproveAll, &mut Vec::new()).await;

    assert_eq!(declared(&first, "components"), names(&["QBtn"]));
    assert!(declared(&second, "components").is_empty());
    assert_eq!(report.missing_count(), 1);
}
