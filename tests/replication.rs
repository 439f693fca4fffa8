use deckscriber::DrawingModeController;
use deckscriber::draw::{DrawingEngine, Sketchpad};
use deckscriber::input::{Key, KeyEvent, LogicalMode, Modifiers};
use deckscriber::sync::{PageId, SharedSyncState, SyncState};

fn make_controller(sync: SharedSyncState, is_presenter: bool) -> DrawingModeController<Sketchpad> {
    let mut controller =
        DrawingModeController::with_defaults(Sketchpad::new(), sync, PageId::from(1), is_presenter);
    controller.set_enabled(true);
    controller
}

/// Copies every page from the presenter's store into the viewer, the way the
/// replication channel would.
fn replicate(from: &SharedSyncState, to: &mut DrawingModeController<Sketchpad>) {
    let pages: Vec<(PageId, String)> = from
        .borrow()
        .pages()
        .map(|(page, content)| (page.clone(), content.to_string()))
        .collect();
    for (page, content) in pages {
        assert!(to.apply_remote_content(page, content));
    }
}

#[test]
fn presenter_drawings_reach_viewer() {
    let presenter_sync = SyncState::shared();
    let viewer_sync = SyncState::shared();
    let mut presenter = make_controller(presenter_sync.clone(), true);
    let mut viewer = make_controller(viewer_sync.clone(), false);

    presenter.handle_key_down(&KeyEvent::plain(Key::Letter('R')));
    presenter.pointer_down((10, 10));
    presenter.pointer_move((60, 40));
    presenter.pointer_up();

    replicate(&presenter_sync, &mut viewer);
    assert_eq!(viewer.engine().shapes(), presenter.engine().shapes());
    assert!(viewer.flags().can_clear);

    presenter.handle_key_down(&KeyEvent::new(Key::Letter('Z'), Modifiers::ctrl()));
    replicate(&presenter_sync, &mut viewer);
    assert_eq!(viewer.engine().element_count(), 0);
    assert!(!viewer.flags().can_clear);
}

#[test]
fn role_swap_reverses_flow() {
    let sync = SyncState::shared();
    let mut controller = make_controller(sync.clone(), false);
    assert!(controller.apply_remote_content(PageId::from(1), String::new()));

    controller.set_presenter(true);
    assert!(sync.borrow().send());
    assert!(!controller.apply_remote_content(PageId::from(1), String::new()));

    controller.handle_key_down(&KeyEvent::plain(Key::Letter('L')));
    assert_eq!(controller.logical_mode(), LogicalMode::Line);
    controller.pointer_down((0, 0));
    controller.pointer_move((5, 0));
    controller.pointer_up();
    assert_eq!(
        sync.borrow().content(&PageId::from(1)),
        Some(controller.engine().dump().as_str())
    );
}
