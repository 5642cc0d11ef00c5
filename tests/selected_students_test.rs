mod common;

use common::{roster, MockGateway};
use student_roster::domain::model::SelectionPolicy;
use student_roster::{SelectedStudentsViewModel, StudentDisplay};

#[tokio::test]
async fn test_init_loads_selected_exactly_once() {
    let gateway = MockGateway::new(roster());
    let mut vm = SelectedStudentsViewModel::new(gateway.clone(), StudentDisplay::default());

    vm.init().await;
    vm.init().await;

    assert_eq!(gateway.state.lock().await.selected_calls, 1);
    assert!(!vm.is_loading());
    assert_eq!(vm.error(), "");
    let names: Vec<String> = vm.students().iter().map(|s| s.full_name()).collect();
    assert_eq!(names, vec!["Alice Tester", "Bob Tester"]);
    assert_eq!(vm.total_count(), 2);
}

#[tokio::test]
async fn test_reload_fetches_again() {
    let gateway = MockGateway::new(roster());
    let mut vm = SelectedStudentsViewModel::new(gateway.clone(), StudentDisplay::default());

    vm.init().await;
    gateway.state.lock().await.students.retain(|s| s.id != 1);
    vm.reload().await;

    assert_eq!(gateway.state.lock().await.selected_calls, 2);
    assert_eq!(vm.total_count(), 1);
}

#[tokio::test]
async fn test_load_failure_sets_error() {
    let gateway = MockGateway::new(roster());
    gateway.state.lock().await.selected_error =
        Some((500, "Server Error: 500 - Internal Server Error".to_string()));
    let mut vm = SelectedStudentsViewModel::new(gateway.clone(), StudentDisplay::default());

    vm.init().await;

    assert!(!vm.is_loading());
    assert!(vm.students().is_empty());
    assert_eq!(
        vm.error(),
        "Failed to load selected students: Server Error: 500 - Internal Server Error"
    );
}

#[tokio::test]
async fn test_server_and_client_thresholds_agree() {
    let students = roster();
    let gateway = MockGateway::new(students.clone());
    let display = StudentDisplay::new(SelectionPolicy::default());
    let mut vm = SelectedStudentsViewModel::new(gateway, display);

    vm.init().await;

    assert_eq!(vm.total_count(), display.selected_count(&students));
    for student in vm.students() {
        assert!(display.is_selected(student.final_score));
        assert_eq!(display.status_text(student.final_score), "SELECTED");
    }
}
