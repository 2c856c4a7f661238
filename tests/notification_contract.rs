#![cfg(not(target_arch = "wasm32"))]

use bellhop::adapters::native::{LoopbackApp, RecordingAudio};
use bellhop::wire::PlayerSlot;
use bellhop::{wire_player, InitOptions, MountPoint, PlaybackError, Platform, PlayerState};

struct Rig {
    app: LoopbackApp,
    audio: RecordingAudio,
}

fn wired(options: InitOptions) -> Rig {
    let app = LoopbackApp::new();
    let audio = RecordingAudio::new();
    let player = wire_player(&app, audio.clone(), &options, Platform::new())
        .expect("Failed to wire player");
    assert_eq!(player.state(), PlayerState::Ready);
    Rig { app, audio }
}

fn all_options() -> Vec<InitOptions> {
    vec![
        InitOptions::full_page(),
        InitOptions::mounted(MountPoint::new("bell-widget").unwrap()),
    ]
}

#[test]
fn test_single_subscription_after_startup() {
    for options in all_options() {
        let rig = wired(options);
        assert_eq!(rig.app.subscription_count(), 1);
        assert_eq!(rig.audio.play_count(), 0, "Startup must not ring the bell");
    }
}

#[test]
fn test_one_beep_plays_once() {
    for options in all_options() {
        let rig = wired(options);
        rig.app.beep();
        assert_eq!(rig.audio.play_count(), 1);
    }
}

#[test]
fn test_every_beep_plays_again() {
    for options in all_options() {
        let rig = wired(options);
        for _ in 0..7 {
            rig.app.beep();
        }
        assert_eq!(rig.audio.play_count(), 7);
    }
}

#[test]
fn test_mount_point_only_changes_init_options() {
    let full_page = wired(InitOptions::full_page());
    let mounted = wired(InitOptions::mounted(MountPoint::new("bell-widget").unwrap()));

    for rig in [&full_page, &mounted] {
        rig.app.beep();
        rig.app.beep();
    }

    assert_eq!(full_page.app.subscription_count(), mounted.app.subscription_count());
    assert_eq!(full_page.audio.play_count(), mounted.audio.play_count());

    assert_eq!(full_page.app.last_options().unwrap().mount, None);
    assert_eq!(
        mounted.app.last_options().unwrap().mount.unwrap().as_str(),
        "bell-widget"
    );
}

#[test]
fn test_failed_play_does_not_stop_later_beeps() {
    let app = LoopbackApp::new();
    let audio = RecordingAudio::failing(PlaybackError::PlaybackRejected(
        "NotAllowedError: play() failed because the user didn't interact".to_string(),
    ));
    let player = wire_player(&app, audio.clone(), &InitOptions::default(), Platform::new())
        .expect("Failed to wire player");

    app.beep();
    app.beep();
    assert_eq!(audio.play_count(), 2);

    audio.set_failure(None);
    app.beep();

    assert_eq!(audio.play_count(), 3);
    let stats = player.stats();
    assert_eq!(stats.notifications, 3);
    assert_eq!(stats.failures, 2);
}

#[test]
fn test_startup_failure_leaves_nothing_subscribed() {
    let app = LoopbackApp::failing(PlaybackError::HostUnavailable(
        "Elm is not defined".to_string(),
    ));
    let audio = RecordingAudio::new();

    let err = wire_player(&app, audio.clone(), &InitOptions::default(), Platform::new())
        .err()
        .expect("Startup should fail");

    assert!(err.is_startup_error());
    assert_eq!(app.subscription_count(), 0);
    app.beep();
    assert_eq!(audio.play_count(), 0);
}

#[test]
fn test_second_startup_keeps_one_subscriber() {
    let slot = PlayerSlot::new();
    let app = LoopbackApp::new();
    let audio = RecordingAudio::new();

    for options in all_options() {
        let _ = slot.wire(&app, || Ok(audio.clone()), &options, Platform::new());
    }

    assert_eq!(app.init_count(), 1);
    assert_eq!(app.subscription_count(), 1);

    app.beep();
    assert_eq!(audio.play_count(), 1, "One beep must ring the bell once");
}
