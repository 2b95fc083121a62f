//! Notification order within and across packets.

use futures::executor::block_on;

use roster_client::{shared::PlayerDelta, PlayerTracker};
use roster_test::{
    assert_event_sequence, assert_not_listed, init_logger, player_info, player_remove, profile,
    EventLog, RecordedEvent,
};

fn tracker_with_log() -> (PlayerTracker, EventLog) {
    init_logger();
    let mut tracker = PlayerTracker::default();
    let log = EventLog::new();
    log.attach(&mut tracker);
    (tracker, log)
}

#[test]
fn entries_are_notified_in_packet_order() {
    let (mut tracker, log) = tracker_with_log();

    block_on(tracker.handle_player_info(&player_info(
        1,
        vec![
            PlayerDelta::new("a").with_player(profile("A")),
            PlayerDelta::new("b").with_player(profile("B")),
        ],
    )))
    .unwrap();

    assert_event_sequence!(log, ["update(a)", "join(a)", "update(b)", "join(b)"]);
}

#[test]
fn known_and_new_players_mixed_in_one_packet() {
    let (mut tracker, log) = tracker_with_log();
    block_on(tracker.handle_player_info(&player_info(
        1,
        vec![PlayerDelta::new("a").with_player(profile("A"))],
    )))
    .unwrap();
    log.clear();

    block_on(tracker.handle_player_info(&player_info(
        0x10,
        vec![
            PlayerDelta::new("a").with_latency(20),
            PlayerDelta::new("b").with_latency(30),
            PlayerDelta::new("a").with_latency(25),
        ],
    )))
    .unwrap();

    assert_event_sequence!(log, ["update(a)", "update(b)", "join(b)", "update(a)"]);
    assert_eq!(tracker.player("a").unwrap().latency, Some(25));
}

#[test]
fn same_new_player_twice_in_one_packet_joins_once() {
    let (mut tracker, log) = tracker_with_log();

    block_on(tracker.handle_player_info(&player_info(
        1,
        vec![
            PlayerDelta::new("a").with_player(profile("A")),
            PlayerDelta::new("a").with_listed(true),
        ],
    )))
    .unwrap();

    assert_event_sequence!(log, ["update(a)", "join(a)", "update(a)"]);
}

#[test]
fn add_player_bit_on_known_player_is_an_update() {
    let (mut tracker, log) = tracker_with_log();
    block_on(tracker.handle_player_info(&player_info(
        1,
        vec![PlayerDelta::new("a").with_player(profile("A"))],
    )))
    .unwrap();
    log.clear();

    // server re-sends ADD_PLAYER alongside a latency refresh
    block_on(tracker.handle_player_info(&player_info(
        0x01 | 0x10,
        vec![PlayerDelta::new("a").with_latency(40)],
    )))
    .unwrap();

    assert_event_sequence!(log, ["update(a)"]);
}

#[test]
fn first_delta_without_add_player_bit_still_joins() {
    let (mut tracker, log) = tracker_with_log();

    block_on(tracker.handle_player_info(&player_info(
        0x10,
        vec![PlayerDelta::new("late").with_latency(80)],
    )))
    .unwrap();

    assert_event_sequence!(log, ["update(late)", "join(late)"]);
    assert_eq!(tracker.player("late").unwrap().player, None);
}

#[test]
fn join_sees_post_merge_record() {
    let (mut tracker, log) = tracker_with_log();

    block_on(tracker.handle_player_info(&player_info(
        1 | 0x04,
        vec![PlayerDelta::new("a").with_player(profile("A")).with_gamemode(3)],
    )))
    .unwrap();

    match &log.events()[1] {
        RecordedEvent::Join { player } => {
            assert_eq!(player.name(), Some("A"));
            assert_eq!(player.gamemode, Some(3));
        }
        other => panic!("Expected join notification, got {:?}", other),
    }
}

#[test]
fn leave_fires_before_eviction() {
    let (mut tracker, log) = tracker_with_log();
    block_on(tracker.handle_player_info(&player_info(
        1,
        vec![
            PlayerDelta::new("a").with_player(profile("A")),
            PlayerDelta::new("b").with_player(profile("B")),
        ],
    )))
    .unwrap();
    log.clear();

    block_on(tracker.handle_player_remove(&player_remove(&["a", "b"]))).unwrap();

    assert_eq!(
        log.events(),
        vec![
            RecordedEvent::Leave {
                uuid: "a".to_string(),
                still_listed: true,
            },
            RecordedEvent::Leave {
                uuid: "b".to_string(),
                still_listed: true,
            },
        ]
    );
    assert_not_listed!(tracker, "a");
    assert_not_listed!(tracker, "b");
}

#[test]
fn earlier_removal_in_batch_is_already_evicted() {
    let (mut tracker, log) = tracker_with_log();
    block_on(tracker.handle_player_info(&player_info(
        1,
        vec![PlayerDelta::new("a"), PlayerDelta::new("b")],
    )))
    .unwrap();

    let seen = std::rc::Rc::new(std::cell::RefCell::new(Vec::new()));
    {
        let seen = std::rc::Rc::clone(&seen);
        tracker.on_leave(move |uuid, roster| {
            let seen = std::rc::Rc::clone(&seen);
            Box::pin(async move {
                if uuid.as_str() == "b" {
                    seen.borrow_mut().push(roster.contains("a"));
                }
                Ok(())
            })
        });
    }
    log.clear();

    block_on(tracker.handle_player_remove(&player_remove(&["a", "b"]))).unwrap();

    assert_eq!(*seen.borrow(), vec![false]);
}

#[test]
fn removing_unknown_player_still_notifies_leave() {
    let (mut tracker, log) = tracker_with_log();

    block_on(tracker.handle_player_remove(&player_remove(&["ghost"]))).unwrap();

    assert_eq!(
        log.events(),
        vec![RecordedEvent::Leave {
            uuid: "ghost".to_string(),
            still_listed: false,
        }]
    );
    assert!(tracker.is_empty());
}

#[test]
fn rejoin_after_leave_joins_again() {
    let (mut tracker, log) = tracker_with_log();
    let join = player_info(1, vec![PlayerDelta::new("a").with_player(profile("A"))]);

    block_on(tracker.handle_player_info(&join)).unwrap();
    block_on(tracker.handle_player_remove(&player_remove(&["a"]))).unwrap();
    block_on(tracker.handle_player_info(&join)).unwrap();

    assert_event_sequence!(
        log,
        ["update(a)", "join(a)", "leave(a)", "update(a)", "join(a)"]
    );
}
