use channel_painter::{
    CancelMode, Channel, Command, FrameInput, LoadState, PainterApp, PainterConfig, PreviewMode,
    Session,
};
use egui::{Pos2, Vec2};
use image::{DynamicImage, GrayImage, Luma, Rgba, RgbaImage};

const VIEWPORT: Vec2 = Vec2::new(100.0, 100.0);

fn frame() -> FrameInput {
    FrameInput {
        viewport: VIEWPORT,
        ..FrameInput::default()
    }
}

fn drag_to(x: f32, y: f32) -> FrameInput {
    FrameInput {
        pointer: Some(Pos2::new(x, y)),
        primary_down: true,
        ..frame()
    }
}

fn keys(commands: &[Command]) -> FrameInput {
    FrameInput {
        commands: commands.to_vec(),
        ..frame()
    }
}

fn ready_session(width: u32, height: u32) -> Session {
    let mut session = Session::default();
    let image = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 255]));
    session.request_load(DynamicImage::ImageRgba8(image));
    session.update(&frame());
    session
}

#[test]
fn test_load_state_machine() {
    let mut session = Session::default();
    assert!(matches!(session.load_state(), LoadState::Unloaded));

    session.request_load(DynamicImage::ImageLuma8(GrayImage::from_pixel(4, 2, Luma([9]))));
    assert!(matches!(session.load_state(), LoadState::Loading(_)));
    assert!(session.buffer().is_none());
    // The texture cannot be synced until the buffer exists
    assert!(!session.take_resync());

    session.update(&frame());
    assert!(session.is_ready());
    let buffer = session.buffer().unwrap();
    assert_eq!(buffer.pixel(3, 1), Some([9, 9, 9, 255]));
    assert!(session.take_resync());
}

#[test]
fn test_scale_follows_viewport() {
    let mut session = ready_session(200, 50);
    assert_eq!(session.scale(), 2.0);

    session.update(&FrameInput {
        viewport: Vec2::new(400.0, 10.0),
        ..FrameInput::default()
    });
    assert_eq!(session.scale(), 5.0);
}

#[test]
fn test_painting_is_ignored_until_ready() {
    let mut session = Session::default();
    let outcome = session.update(&drag_to(10.0, 10.0));
    assert!(!outcome.stamped);

    session.update(&keys(&[Command::AppendDigit(5), Command::CommitValue]));
    assert_eq!(session.brush().value, 0);
}

#[test]
fn test_numeric_entry_commits_value() {
    let mut session = ready_session(10, 10);
    session.update(&keys(&[Command::AppendDigit(4), Command::AppendDigit(2)]));
    assert_eq!(session.pending_value(), 42);
    assert_eq!(session.brush().value, 0);

    session.update(&keys(&[Command::CommitValue]));
    assert_eq!(session.brush().value, 42);
    assert_eq!(session.pending_value(), 0);
}

#[test]
fn test_entry_above_255_keeps_low_byte() {
    let mut session = ready_session(10, 10);
    session.update(&keys(&[
        Command::AppendDigit(3),
        Command::AppendDigit(0),
        Command::AppendDigit(0),
        Command::CommitValue,
    ]));
    assert_eq!(session.brush().value, 44);

    assert!(session.update(&drag_to(5.0, 5.0)).stamped);
    assert_eq!(session.buffer().unwrap().pixel(5, 5), Some([0, 0, 0, 44]));
}

#[test]
fn test_cancel_modes() {
    let mut session = ready_session(10, 10);
    session.update(&keys(&[
        Command::AppendDigit(1),
        Command::AppendDigit(2),
        Command::AppendDigit(3),
        Command::CancelEntry,
    ]));
    assert_eq!(session.pending_value(), 12);

    session.set_cancel_mode(CancelMode::Clear);
    session.update(&keys(&[Command::CancelEntry]));
    assert_eq!(session.pending_value(), 0);
}

#[test]
fn test_last_channel_key_wins() {
    let mut session = ready_session(10, 10);
    session.update(&keys(&[
        Command::SelectChannel(Channel::R),
        Command::SelectChannel(Channel::B),
    ]));
    assert_eq!(session.brush().channel, Channel::B);
}

#[test]
fn test_stationary_pointer_does_not_stamp() {
    let mut session = ready_session(100, 100);
    session.take_resync();

    assert!(session.update(&drag_to(50.0, 50.0)).stamped);
    assert!(session.take_resync());

    assert!(!session.update(&drag_to(50.0, 50.0)).stamped);
    assert!(!session.update(&drag_to(50.0, 50.0)).stamped);
    assert!(!session.take_resync());
}

#[test]
fn test_moving_without_button_does_not_stamp() {
    let mut session = ready_session(100, 100);
    let outcome = session.update(&FrameInput {
        pointer: Some(Pos2::new(30.0, 30.0)),
        ..frame()
    });
    assert!(!outcome.stamped);
    assert_eq!(session.hovered_color(), Some([0, 0, 0, 255]));
}

#[test]
fn test_stamp_writes_selected_channel_in_image_space() {
    // 200x200 image in a 100x100 viewport: scale 2
    let mut session = ready_session(200, 200);
    session.update(&keys(&[
        Command::SelectChannel(Channel::G),
        Command::AppendDigit(9),
        Command::CommitValue,
    ]));

    assert!(session.update(&drag_to(25.0, 40.0)).stamped);

    let buffer = session.buffer().unwrap();
    assert_eq!(buffer.pixel(50, 80), Some([0, 9, 0, 255]));
    assert_eq!(buffer.pixel(25, 40), Some([0, 0, 0, 255]));
    assert_eq!(session.pointer().previous, Pos2::new(50.0, 80.0));
}

#[test]
fn test_wheel_adjusts_radius() {
    let mut session = ready_session(10, 10);
    assert_eq!(session.brush().radius, 40.0);

    session.update(&FrameInput {
        wheel_notches: 1.5,
        ..frame()
    });
    assert_eq!(session.brush().radius, 55.0);

    session.update(&FrameInput {
        wheel_notches: -20.0,
        ..frame()
    });
    assert_eq!(session.brush().radius, 0.0);
}

#[test]
fn test_file_commands_are_deferred() {
    let mut session = ready_session(10, 10);
    let outcome = session.update(&keys(&[Command::ExportImage, Command::AppendDigit(1)]));
    assert_eq!(outcome.deferred, vec![Command::ExportImage]);
    assert_eq!(session.pending_value(), 1);
}

#[test]
fn test_channel_preview_requests_resync() {
    let mut session = ready_session(10, 10);
    session.take_resync();

    session.update(&keys(&[Command::SelectChannel(Channel::R)]));
    assert!(!session.take_resync());

    session.update(&keys(&[Command::TogglePreview]));
    assert_eq!(session.preview_mode(), PreviewMode::Channel);
    assert!(session.take_resync());

    session.update(&keys(&[Command::SelectChannel(Channel::G)]));
    assert!(session.take_resync());
}

#[test]
fn test_replacing_image_drops_old_buffer() {
    let mut session = ready_session(10, 10);
    session.request_load(DynamicImage::ImageRgba8(RgbaImage::new(3, 3)));
    assert!(session.buffer().is_none());

    session.update(&frame());
    assert_eq!(session.buffer().map(|b| (b.width(), b.height())), Some((3, 3)));
}

#[test]
fn test_button_press_selects_channel_without_painting() {
    let mut app = PainterApp::with_config(PainterConfig::default());
    app.session_mut()
        .request_load(DynamicImage::ImageRgba8(RgbaImage::new(100, 100)));
    app.step(frame());

    let red = app
        .buttons()
        .iter()
        .find(|button| button.action == Command::SelectChannel(Channel::R))
        .map(|button| button.region.center())
        .unwrap();

    let outcome = app.step(FrameInput {
        pointer: Some(red),
        primary_down: true,
        primary_pressed: true,
        ..frame()
    });
    assert!(!outcome.stamped);
    assert_eq!(app.session().brush().channel, Channel::R);
}

#[test]
fn test_config_sets_initial_brush() {
    let config = PainterConfig {
        brush_radius: 5.0,
        channel: Channel::B,
        ..PainterConfig::default()
    };
    let app = PainterApp::with_config(config);
    assert_eq!(app.session().brush().radius, 5.0);
    assert_eq!(app.session().brush().channel, Channel::B);
}
