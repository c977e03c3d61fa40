//! Tests for the players table page controller.

use std::ops::RangeInclusive;
use std::sync::{Arc, Mutex};

use pagination::PageSize;
use rstest::{fixture, rstest};

use super::*;
use crate::domain::player::{Birthday, Profession, Race};
use crate::domain::ports::MockPlayerGateway;
use crate::domain::table::RowAction;

#[derive(Default)]
struct RecordingView {
    rows: Vec<RowView>,
    buttons: Vec<PageButton>,
    row_renders: usize,
    form: Option<PlayerForm>,
}

impl PlayerTableView for RecordingView {
    fn render_rows(&mut self, rows: &[RowView]) {
        self.rows = rows.to_vec();
        self.row_renders += 1;
    }

    fn render_pagination(&mut self, buttons: &[PageButton]) {
        self.buttons = buttons.to_vec();
    }

    fn render_create_form(&mut self, form: &PlayerForm) {
        self.form = Some(form.clone());
    }
}

impl RecordingView {
    fn numbers(&self) -> Vec<u64> {
        self.rows.iter().map(|row| row.number).collect()
    }

    fn active_buttons(&self) -> Vec<u32> {
        self.buttons
            .iter()
            .filter(|button| button.active)
            .map(|button| button.index)
            .collect()
    }
}

#[derive(Default)]
struct RecordingNotifier {
    alerts: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn alert(&self, message: &str) {
        self.alerts
            .lock()
            .expect("alerts lock")
            .push(message.to_owned());
    }
}

impl RecordingNotifier {
    fn alerts(&self) -> Vec<String> {
        self.alerts.lock().expect("alerts lock").clone()
    }
}

type Controller = PlayerTableController<MockPlayerGateway, RecordingNotifier, RecordingView>;

fn size(value: u32) -> PageSize {
    PageSize::new(value).expect("positive page size")
}

fn player(id: i64) -> PlayerRecord {
    PlayerRecord {
        id: PlayerId::new(id),
        name: format!("Player{id}"),
        title: "Wanderer".to_owned(),
        race: Race::Human,
        profession: Profession::Warrior,
        level: 10,
        birthday: Birthday::from_epoch_millis(978_307_200_000),
        banned: false,
    }
}

fn players(ids: RangeInclusive<i64>) -> Vec<PlayerRecord> {
    ids.map(player).collect()
}

fn script_counts(gateway: &mut MockPlayerGateway, counts: Vec<u64>) {
    let calls = counts.len();
    let mut counts = counts.into_iter();
    gateway
        .expect_fetch_count()
        .times(calls)
        .returning(move || Ok(CountPayload::Count(counts.next().expect("scripted count"))));
}

fn expect_page(
    gateway: &mut MockPlayerGateway,
    page_number: u32,
    page_size: u32,
    rows: Vec<PlayerRecord>,
) {
    gateway
        .expect_fetch_page()
        .withf(move |request| {
            request.page_number == page_number && request.page_size.get() == page_size
        })
        .times(1)
        .return_once(move |_| Ok(rows));
}

#[fixture]
fn notifier() -> Arc<RecordingNotifier> {
    Arc::new(RecordingNotifier::default())
}

fn controller(gateway: MockPlayerGateway, notifier: &Arc<RecordingNotifier>) -> Controller {
    let selector = PageSizeSelector::new([size(3), size(5), size(10), size(20)], size(5));
    PlayerTableController::new(
        Arc::new(gateway),
        Arc::clone(notifier),
        RecordingView::default(),
        selector,
    )
}

#[rstest]
#[tokio::test]
async fn start_loads_count_then_first_page(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![12]);
    expect_page(&mut gateway, 0, 5, players(1..=5));

    let mut controller = controller(gateway, &notifier);
    let outcome = controller.start().await;

    assert_eq!(outcome, PageLoadOutcome::Loaded { rows: 5 });
    assert_eq!(controller.view().numbers(), vec![1, 2, 3, 4, 5]);
    assert_eq!(controller.view().buttons.len(), 3);
    assert_eq!(controller.view().active_buttons(), vec![0]);
    assert_eq!(controller.view().form, Some(PlayerForm::blank()));
    assert!(notifier.alerts().is_empty());
}

#[rstest]
#[tokio::test]
async fn last_page_numbers_rows_after_previous_pages(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![12]);
    expect_page(&mut gateway, 2, 5, players(11..=12));

    let mut controller = controller(gateway, &notifier);
    controller.refresh_total_count().await;
    let outcome = controller.load_page(2).await;

    assert_eq!(outcome, PageLoadOutcome::Loaded { rows: 2 });
    assert_eq!(controller.view().numbers(), vec![11, 12]);
    let labels: Vec<u64> = controller
        .view()
        .buttons
        .iter()
        .map(PageButton::label)
        .collect();
    assert_eq!(labels, vec![1, 2, 3]);
    assert_eq!(controller.view().active_buttons(), vec![2]);
}

#[rstest]
#[tokio::test]
async fn unrecognised_count_is_zero_without_alert(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    gateway
        .expect_fetch_count()
        .times(1)
        .return_once(|| Ok(CountPayload::Unrecognised("{\"total\":7}".to_owned())));

    let mut controller = controller(gateway, &notifier);
    assert_eq!(controller.refresh_total_count().await, 0);
    assert_eq!(controller.page_state().total_record_count(), 0);
    assert!(notifier.alerts().is_empty());
}

#[rstest]
#[tokio::test]
async fn failed_count_alerts_and_is_zero(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    gateway
        .expect_fetch_count()
        .times(1)
        .return_once(|| Err(PlayerGatewayError::transport("connection refused")));

    let mut controller = controller(gateway, &notifier);
    assert_eq!(controller.refresh_total_count().await, 0);
    assert_eq!(notifier.alerts(), vec![COUNT_FAILED.to_owned()]);
}

#[rstest]
#[tokio::test]
async fn empty_table_renders_no_page_buttons(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![0]);
    expect_page(&mut gateway, 0, 5, Vec::new());

    let mut controller = controller(gateway, &notifier);
    controller.start().await;

    assert!(controller.view().buttons.is_empty());
    assert!(controller.view().rows.is_empty());
}

#[rstest]
#[tokio::test]
async fn changing_page_size_returns_to_first_page(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![30, 30]);
    expect_page(&mut gateway, 3, 5, players(16..=20));
    expect_page(&mut gateway, 0, 10, players(1..=10));

    let mut controller = controller(gateway, &notifier);
    controller.refresh_total_count().await;
    controller.load_page(3).await;

    let outcome = controller
        .change_page_size(size(10))
        .await
        .expect("10 is offered");

    assert_eq!(outcome, PageLoadOutcome::Loaded { rows: 10 });
    assert_eq!(controller.page_state().current_page_index(), 0);
    assert_eq!(controller.page_state().page_size(), size(10));
    assert_eq!(controller.view().buttons.len(), 3);
    assert_eq!(controller.view().numbers().first(), Some(&1));
}

#[rstest]
#[tokio::test]
async fn unlisted_page_size_sends_nothing(notifier: Arc<RecordingNotifier>) {
    let gateway = MockPlayerGateway::new();
    let mut controller = controller(gateway, &notifier);

    let result = controller.change_page_size(size(7)).await;

    assert!(result.is_err());
    assert_eq!(controller.page_size_selector().selected(), size(5));
}

#[rstest]
#[tokio::test]
async fn non_sequence_page_alerts_invalid_format(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    gateway
        .expect_fetch_page()
        .times(1)
        .return_once(|_| Err(PlayerGatewayError::decode("expected a sequence")));

    let mut controller = controller(gateway, &notifier);
    let outcome = controller.load_page(0).await;

    assert_eq!(outcome, PageLoadOutcome::InvalidFormat);
    assert_eq!(notifier.alerts(), vec![PAGE_INVALID_FORMAT.to_owned()]);
    assert_eq!(controller.view().row_renders, 1);
    assert!(controller.view().rows.is_empty());
}

#[rstest]
#[tokio::test]
async fn failed_page_request_keeps_current_rows(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![10]);
    expect_page(&mut gateway, 0, 5, players(1..=5));
    gateway
        .expect_fetch_page()
        .withf(|request| request.page_number == 1)
        .times(1)
        .return_once(|_| Err(PlayerGatewayError::status(500_u16, "boom")));

    let mut controller = controller(gateway, &notifier);
    controller.start().await;
    let outcome = controller.load_page(1).await;

    assert_eq!(outcome, PageLoadOutcome::Failed);
    assert_eq!(notifier.alerts(), vec![PAGE_FAILED.to_owned()]);
    assert_eq!(controller.view().numbers(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
#[tokio::test]
async fn rows_keep_their_numbers_after_a_failed_load(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![10]);
    expect_page(&mut gateway, 0, 5, players(1..=5));
    gateway
        .expect_fetch_page()
        .withf(|request| request.page_number == 1)
        .times(1)
        .return_once(|_| Err(PlayerGatewayError::status(500_u16, "boom")));

    let mut controller = controller(gateway, &notifier);
    controller.start().await;
    controller.load_page(1).await;

    assert_eq!(controller.begin_edit(PlayerId::new(1)), EditOutcome::Started);
    assert_eq!(controller.view().numbers(), vec![1, 2, 3, 4, 5]);

    controller.redraw();
    assert_eq!(controller.view().numbers(), vec![1, 2, 3, 4, 5]);
    assert_eq!(controller.view().active_buttons(), vec![0]);
    assert_eq!(controller.page_state().current_page_index(), 1);
    assert_eq!(controller.shown_page().page_number, 0);
}

#[rstest]
#[tokio::test]
async fn failed_page_size_change_keeps_the_shown_layout(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![10, 10]);
    expect_page(&mut gateway, 1, 5, players(6..=10));
    gateway
        .expect_fetch_page()
        .withf(|request| request.page_size.get() == 10)
        .times(1)
        .return_once(|_| Err(PlayerGatewayError::timeout("slow")));

    let mut controller = controller(gateway, &notifier);
    controller.refresh_total_count().await;
    controller.load_page(1).await;
    let outcome = controller
        .change_page_size(size(10))
        .await
        .expect("10 is offered");
    controller.redraw();

    assert_eq!(outcome, PageLoadOutcome::Failed);
    assert_eq!(controller.view().numbers(), vec![6, 7, 8, 9, 10]);
    assert_eq!(controller.view().buttons.len(), 2);
    assert_eq!(controller.view().active_buttons(), vec![1]);
    assert_eq!(controller.page_state().page_size(), size(10));
}

#[rstest]
#[tokio::test]
async fn oversized_count_is_clamped(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![1_000_000_000_000]);

    let mut controller = controller(gateway, &notifier);

    assert_eq!(controller.refresh_total_count().await, MAX_RECORD_COUNT);
    let buttons = controller.render_pagination();
    assert_eq!(buttons.len(), 20_000);
    assert!(notifier.alerts().is_empty());
}

#[rstest]
fn superseded_page_response_is_dropped(notifier: Arc<RecordingNotifier>) {
    let mut controller = controller(MockPlayerGateway::new(), &notifier);
    controller.page.set_total_record_count(15);

    let first = controller.begin_page_load(1);
    let second = controller.begin_page_load(2);

    let newest = controller.finish_page_load(second, Ok(players(11..=15)));
    let late = controller.finish_page_load(first, Ok(players(6..=10)));

    assert_eq!(newest, PageLoadOutcome::Loaded { rows: 5 });
    assert_eq!(late, PageLoadOutcome::Stale);
    assert_eq!(controller.view().numbers(), vec![11, 12, 13, 14, 15]);
    assert_eq!(controller.view().active_buttons(), vec![2]);
    assert_eq!(controller.view().row_renders, 1);
}

#[rstest]
fn stale_failure_does_not_alert(notifier: Arc<RecordingNotifier>) {
    let mut controller = controller(MockPlayerGateway::new(), &notifier);

    let first = controller.begin_page_load(0);
    let _second = controller.begin_page_load(1);
    let outcome = controller.finish_page_load(first, Err(PlayerGatewayError::timeout("slow")));

    assert_eq!(outcome, PageLoadOutcome::Stale);
    assert!(notifier.alerts().is_empty());
}

#[rstest]
#[tokio::test]
async fn rejected_create_keeps_form_and_alerts(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    gateway
        .expect_create()
        .withf(|draft| draft.level.is_none() && draft.name == "Aragorn")
        .times(1)
        .return_once(|_| Err(PlayerGatewayError::status(400_u16, "")));

    let mut controller = controller(gateway, &notifier);
    controller
        .set_create_field(PlayerField::Name, "Aragorn")
        .expect("text widget");
    controller
        .set_create_field(PlayerField::Level, "abc")
        .expect("number widget");

    let outcome = controller.submit_create().await;

    assert_eq!(outcome, MutationOutcome::Failed);
    assert_eq!(notifier.alerts(), vec![CREATE_FAILED.to_owned()]);
    assert_eq!(controller.create_form().value(PlayerField::Level), "abc");
    assert_eq!(controller.create_form().value(PlayerField::Name), "Aragorn");
}

#[rstest]
#[tokio::test]
async fn successful_create_reloads_first_page_and_clears_form(
    notifier: Arc<RecordingNotifier>,
) {
    let mut gateway = MockPlayerGateway::new();
    gateway
        .expect_create()
        .withf(|draft| {
            draft.race == Race::Elf
                && draft.level == Some(30)
                && draft.birthday == Birthday::from_iso_date("2004-02-29")
                && draft.banned
        })
        .times(1)
        .return_once(|_| Ok(()));
    script_counts(&mut gateway, vec![6]);
    expect_page(&mut gateway, 0, 5, players(1..=5));

    let mut controller = controller(gateway, &notifier);
    for (field, raw) in [
        (PlayerField::Name, "Arwen"),
        (PlayerField::Title, "Evenstar"),
        (PlayerField::Race, "ELF"),
        (PlayerField::Level, "30"),
        (PlayerField::Birthday, "2004-02-29"),
        (PlayerField::Banned, "true"),
    ] {
        controller.set_create_field(field, raw).expect("valid widget value");
    }

    let outcome = controller.submit_create().await;

    assert_eq!(outcome, MutationOutcome::Applied);
    assert_eq!(notifier.alerts(), vec![CREATE_SUCCEEDED.to_owned()]);
    assert_eq!(controller.create_form(), &PlayerForm::blank());
    assert_eq!(controller.view().form, Some(PlayerForm::blank()));
    assert_eq!(controller.view().buttons.len(), 2);
}

#[rstest]
#[tokio::test]
async fn delete_reloads_the_same_page_with_new_total(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![13, 12]);
    expect_page(&mut gateway, 2, 5, players(11..=13));
    gateway
        .expect_delete()
        .withf(|id| *id == PlayerId::new(12))
        .times(1)
        .return_once(|_| Ok(()));
    expect_page(&mut gateway, 2, 5, vec![player(11), player(13)]);

    let mut controller = controller(gateway, &notifier);
    controller.refresh_total_count().await;
    controller.load_page(2).await;

    let outcome = controller.delete_player(PlayerId::new(12)).await;

    assert_eq!(outcome, MutationOutcome::Applied);
    assert_eq!(
        notifier.alerts(),
        vec!["Player with ID 12 deleted successfully.".to_owned()]
    );
    assert_eq!(controller.page_state().current_page_index(), 2);
    assert_eq!(controller.page_state().total_record_count(), 12);
    assert_eq!(controller.view().numbers(), vec![11, 12]);
}

#[rstest]
#[tokio::test]
async fn delete_of_last_row_on_last_page_steps_back(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![11, 10]);
    expect_page(&mut gateway, 2, 5, vec![player(11)]);
    gateway.expect_delete().times(1).return_once(|_| Ok(()));
    expect_page(&mut gateway, 1, 5, players(6..=10));

    let mut controller = controller(gateway, &notifier);
    controller.refresh_total_count().await;
    controller.load_page(2).await;
    controller.delete_player(PlayerId::new(11)).await;

    assert_eq!(controller.page_state().current_page_index(), 1);
    assert_eq!(controller.view().active_buttons(), vec![1]);
}

#[rstest]
#[tokio::test]
async fn failed_delete_alerts_without_reload(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    gateway
        .expect_delete()
        .times(1)
        .return_once(|_| Err(PlayerGatewayError::status(404_u16, "")));

    let mut controller = controller(gateway, &notifier);
    let outcome = controller.delete_player(PlayerId::new(4)).await;

    assert_eq!(outcome, MutationOutcome::Failed);
    assert_eq!(
        notifier.alerts(),
        vec!["Failed to delete player with ID 4.".to_owned()]
    );
}

#[rstest]
#[tokio::test]
async fn editing_row_hides_delete_and_keeps_draft_on_second_click(
    notifier: Arc<RecordingNotifier>,
) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![3]);
    expect_page(&mut gateway, 0, 5, players(1..=3));

    let mut controller = controller(gateway, &notifier);
    controller.start().await;

    assert_eq!(controller.begin_edit(PlayerId::new(2)), EditOutcome::Started);
    controller
        .set_edit_field(PlayerId::new(2), PlayerField::Title, "Changed")
        .expect("row is editing");
    assert_eq!(
        controller.begin_edit(PlayerId::new(2)),
        EditOutcome::AlreadyEditing
    );
    assert_eq!(controller.begin_edit(PlayerId::new(99)), EditOutcome::UnknownRow);

    let rows = &controller.view().rows;
    let editing = rows.get(1).expect("second row");
    assert_eq!(editing.actions(), &[RowAction::Save]);
    match &editing.content {
        RowContent::Editing(form) => assert_eq!(form.value(PlayerField::Title), "Changed"),
        RowContent::Display(_) => panic!("row 2 should be editing"),
    }
    let displayed = rows.first().expect("first row");
    assert_eq!(displayed.actions(), &[RowAction::Edit, RowAction::Delete]);
}

#[rstest]
#[tokio::test]
async fn save_with_blank_birthday_sends_null_and_reloads(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![8, 8]);
    expect_page(&mut gateway, 1, 5, players(6..=8));
    gateway
        .expect_update()
        .withf(|id, draft| {
            *id == PlayerId::new(7)
                && draft.birthday.is_none()
                && draft.level == Some(55)
                && draft.name == "Player7"
        })
        .times(1)
        .return_once(|_, _| Ok(()));
    expect_page(&mut gateway, 1, 5, players(6..=8));

    let mut controller = controller(gateway, &notifier);
    controller.refresh_total_count().await;
    controller.load_page(1).await;
    controller.begin_edit(PlayerId::new(7));
    controller
        .set_edit_field(PlayerId::new(7), PlayerField::Birthday, "")
        .expect("editing");
    controller
        .set_edit_field(PlayerId::new(7), PlayerField::Level, "55")
        .expect("editing");

    let outcome = controller.save_edit(PlayerId::new(7)).await;

    assert_eq!(outcome, SaveOutcome::Saved);
    assert_eq!(
        notifier.alerts(),
        vec!["Player with ID 7 was successfully updated.".to_owned()]
    );
    assert_eq!(controller.edits().editing_count(), 0);
    assert!(controller.view().rows.iter().all(|row| !row.is_editing()));
    assert_eq!(controller.view().numbers(), vec![6, 7, 8]);
}

#[rstest]
#[tokio::test]
async fn failed_save_leaves_row_editing(notifier: Arc<RecordingNotifier>) {
    let mut gateway = MockPlayerGateway::new();
    script_counts(&mut gateway, vec![2]);
    expect_page(&mut gateway, 0, 5, players(1..=2));
    gateway
        .expect_update()
        .times(1)
        .return_once(|_, _| Err(PlayerGatewayError::status(400_u16, "bad level")));

    let mut controller = controller(gateway, &notifier);
    controller.start().await;
    controller.begin_edit(PlayerId::new(1));
    controller
        .set_edit_field(PlayerId::new(1), PlayerField::Level, "500")
        .expect("editing");

    let outcome = controller.save_edit(PlayerId::new(1)).await;

    assert_eq!(outcome, SaveOutcome::Failed);
    assert_eq!(
        notifier.alerts(),
        vec!["Failed to update player with ID 1.".to_owned()]
    );
    assert!(controller.edits().is_editing(PlayerId::new(1)));
    assert!(controller.view().rows.first().is_some_and(RowView::is_editing));
}

#[rstest]
#[tokio::test]
async fn saving_a_displayed_row_sends_nothing(notifier: Arc<RecordingNotifier>) {
    let mut controller = controller(MockPlayerGateway::new(), &notifier);
    assert_eq!(
        controller.save_edit(PlayerId::new(1)).await,
        SaveOutcome::NotEditing
    );
    assert!(notifier.alerts().is_empty());
}
