use super::*;
use crate::core::{DrawMode, RotateDirection};
use crate::kernel::services::ports::{CropRect, DocumentModel};
use crate::kernel::FilterPreset;
use crate::test_support::{decode, fixture, payload, Fixture};

async fn loaded() -> (OperationDispatcher, Fixture) {
    let mut fx = fixture("cat.png", &payload());
    fx.session.load().await.unwrap();
    (OperationDispatcher::new(&EditorConfig::default()), fx)
}

#[tokio::test]
async fn no_session_is_a_silent_no_op() {
    let dispatcher = OperationDispatcher::new(&EditorConfig::default());
    let outcome = dispatcher
        .execute(None, &Command::ApplyRotate(RotateDirection::Clockwise))
        .await
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::NoSession);
}

#[tokio::test]
async fn rotate_turns_by_step_and_syncs() {
    let (dispatcher, mut fx) = loaded().await;

    let outcome = dispatcher
        .execute(
            Some(&mut fx.session),
            &Command::ApplyRotate(RotateDirection::Clockwise),
        )
        .await
        .unwrap();
    assert_eq!(outcome, DispatchOutcome::Applied { synced: true });

    dispatcher
        .execute(
            Some(&mut fx.session),
            &Command::ApplyRotate(RotateDirection::CounterClockwise),
        )
        .await
        .unwrap();

    assert_eq!(fx.surface.borrow().calls, ["rotate:30", "rotate:-30"]);
    assert_eq!(fx.session.binding().sync_count(), 2);
}

#[tokio::test]
async fn open_commands_do_not_touch_surface() {
    let (dispatcher, mut fx) = loaded().await;
    for command in [
        Command::OpenRotate,
        Command::OpenFilter,
        Command::OpenFlip,
        Command::OpenDraw,
        Command::OpenClear,
    ] {
        let outcome = dispatcher
            .execute(Some(&mut fx.session), &command)
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Applied { synced: false });
    }
    assert!(fx.surface.borrow().calls.is_empty());
    assert_eq!(fx.session.binding().sync_count(), 0);
}

#[tokio::test]
async fn filter_flip_and_clear_sync_once_each() {
    let (dispatcher, mut fx) = loaded().await;
    let commands = [
        FilterPreset::Blur.command(),
        FilterPreset::Sepia2.command(),
        Command::ApplyFlip(FlipKind::X),
        Command::ApplyFlip(FlipKind::Y),
        Command::ApplyFlip(FlipKind::Reset),
        Command::ApplyClear,
    ];
    for command in &commands {
        dispatcher
            .execute(Some(&mut fx.session), command)
            .await
            .unwrap();
    }

    assert_eq!(
        fx.surface.borrow().calls,
        [
            r#"filter:Blur{"blur":0.1}"#,
            "filter:vintage",
            "flipX",
            "flipY",
            "resetFlip",
            "clear",
        ]
    );
    assert_eq!(fx.session.binding().sync_count(), commands.len() as u64);
}

#[tokio::test]
async fn apply_crop_commits_default_zone_and_syncs_once() {
    let (dispatcher, mut fx) = loaded().await;

    let opened = dispatcher
        .execute(Some(&mut fx.session), &Command::Crop)
        .await
        .unwrap();
    assert_eq!(opened, DispatchOutcome::Applied { synced: false });
    assert_eq!(fx.session.crop_state(), CropState::Cropping);
    assert_eq!(fx.surface.borrow().mode, Some(SurfaceMode::Cropper));

    let applied = dispatcher
        .execute(Some(&mut fx.session), &Command::ApplyCrop)
        .await
        .unwrap();

    assert_eq!(applied, DispatchOutcome::Applied { synced: true });
    assert_eq!(fx.session.crop_state(), CropState::Idle);
    assert_eq!(fx.session.binding().sync_count(), 1);
    let log = fx.surface.borrow();
    assert_eq!(log.crops, [CropRect::new(0.0, 0.0, 640.0, 480.0)]);
    assert_eq!(log.mode, None);
    assert_eq!(log.root_max_height, Some(500));
    assert_eq!(
        log.calls,
        ["start:CROPPER", "crop", "stop", "maxHeight:500"]
    );
}

#[tokio::test]
async fn apply_crop_uses_selected_zone() {
    let (dispatcher, mut fx) = loaded().await;
    fx.session.set_container_max_height(320);
    dispatcher
        .execute(Some(&mut fx.session), &Command::Crop)
        .await
        .unwrap();
    fx.surface.borrow_mut().crop_zone = CropRect::new(10.0, 20.0, 100.0, 50.0);

    dispatcher
        .execute(Some(&mut fx.session), &Command::ApplyCrop)
        .await
        .unwrap();

    let log = fx.surface.borrow();
    assert_eq!(log.crops, [CropRect::new(10.0, 20.0, 100.0, 50.0)]);
    assert_eq!(log.root_max_height, Some(320));
}

#[tokio::test]
async fn cancel_crop_never_syncs() {
    let (dispatcher, mut fx) = loaded().await;
    dispatcher
        .execute(Some(&mut fx.session), &Command::Crop)
        .await
        .unwrap();

    let outcome = dispatcher
        .execute(Some(&mut fx.session), &Command::CancelCrop)
        .await
        .unwrap();

    assert_eq!(outcome, DispatchOutcome::Applied { synced: false });
    assert_eq!(fx.session.crop_state(), CropState::Idle);
    assert_eq!(fx.session.binding().sync_count(), 0);
    assert!(fx.surface.borrow().crops.is_empty());
    assert_eq!(fx.surface.borrow().mode, None);
}

#[tokio::test]
async fn crop_transitions_outside_cropping_are_ignored() {
    let (dispatcher, mut fx) = loaded().await;
    for command in [Command::ApplyCrop, Command::CancelCrop] {
        let outcome = dispatcher
            .execute(Some(&mut fx.session), &command)
            .await
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Ignored);
    }

    dispatcher
        .execute(Some(&mut fx.session), &Command::Crop)
        .await
        .unwrap();
    let again = dispatcher
        .execute(Some(&mut fx.session), &Command::Crop)
        .await
        .unwrap();
    assert_eq!(again, DispatchOutcome::Ignored);
    assert_eq!(fx.surface.borrow().calls, ["start:CROPPER"]);
}

#[tokio::test]
async fn failed_crop_commit_stays_cropping() {
    let (dispatcher, mut fx) = loaded().await;
    dispatcher
        .execute(Some(&mut fx.session), &Command::Crop)
        .await
        .unwrap();
    fx.surface.borrow_mut().fail_crop = true;

    let err = dispatcher
        .execute(Some(&mut fx.session), &Command::ApplyCrop)
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::Surface(SurfaceError::Failed { op: "crop", .. })));
    assert_eq!(fx.session.crop_state(), CropState::Cropping);
    assert_eq!(fx.session.binding().sync_count(), 0);
    assert_eq!(fx.surface.borrow().mode, Some(SurfaceMode::Cropper));
}

#[tokio::test]
async fn draw_replaces_previous_mode() {
    let (dispatcher, mut fx) = loaded().await;
    dispatcher
        .execute(
            Some(&mut fx.session),
            &Command::ApplyDraw {
                mode: DrawMode::FreeDrawing,
                color: "#ff0000".to_string(),
            },
        )
        .await
        .unwrap();
    dispatcher
        .execute(
            Some(&mut fx.session),
            &Command::ApplyDraw {
                mode: DrawMode::StraightLine,
                color: "#00ff00".to_string(),
            },
        )
        .await
        .unwrap();

    let log = fx.surface.borrow();
    assert_eq!(log.mode, Some(SurfaceMode::LineDrawing));
    assert_eq!(
        log.brush,
        Some(BrushOptions {
            color: "#00ff00".to_string()
        })
    );
    assert_eq!(
        log.calls,
        ["stop", "start:FREE_DRAWING", "stop", "start:LINE_DRAWING"]
    );
    assert_eq!(fx.session.binding().sync_count(), 2);
}

#[tokio::test]
async fn later_sync_sees_later_state() {
    let (dispatcher, mut fx) = loaded().await;
    dispatcher
        .execute(Some(&mut fx.session), &Command::ApplyFlip(FlipKind::X))
        .await
        .unwrap();
    let first = fx.session.document().model().content();
    dispatcher
        .execute(Some(&mut fx.session), &Command::ApplyFlip(FlipKind::Y))
        .await
        .unwrap();
    let second = fx.session.document().model().content();

    assert!(decode(&first).ends_with(b"|flipX"));
    assert!(decode(&second).ends_with(b"|flipX|flipY"));
}
