//! Round engine scenario tests.
//!
//! These tests drive the engine with scripted dice and verify:
//! - come-out resolution (naturals, craps, points)
//! - point resolution (made, seven-out, no decision)
//! - the asymmetry between declining at come-out and declining on a point
//! - callback ordering and error propagation

use std::cell::RefCell;

use craps_engine::core::{Phase, Point, Roll, ScriptedDice, Tally};
use craps_engine::engine::{CallbackKind, DecisionError, EngineError, Fallible, RoundEngine};

/// Engine over scripted rolls with a recording reporter and the given deciders.
fn scripted_engine<'a>(
    pairs: &[(u8, u8)],
    rolls: &'a RefCell<Vec<Roll>>,
    round_start: impl FnMut(u32, u32) -> bool + 'a,
    point: impl FnMut(Point) -> bool + 'a,
) -> RoundEngine<'a, ScriptedDice> {
    RoundEngine::new(ScriptedDice::from_pairs(pairs))
        .with_roll_reporter(move |roll: Roll| rolls.borrow_mut().push(roll))
        .with_round_start_decider(round_start)
        .with_point_decider(point)
}

// =============================================================================
// Come-out Scenarios
// =============================================================================

/// Scenario A: 3+4 is a natural; the round-start decider is asked again.
#[test]
fn test_natural_win_asks_again() {
    let rolls = RefCell::new(Vec::new());
    let asked = RefCell::new(Vec::new());

    let mut engine = scripted_engine(
        &[(3, 4)],
        &rolls,
        |wins, losses| {
            asked.borrow_mut().push((wins, losses));
            asked.borrow().len() == 1
        },
        |_| panic!("no point should be established"),
    );

    engine.play().unwrap();

    assert_eq!(engine.wins(), 1);
    assert_eq!(engine.losses(), 0);
    assert_eq!(*asked.borrow(), vec![(0, 0), (1, 0)]);
    assert_eq!(engine.phase(), Phase::Done);
}

/// Scenario B: snake eyes craps out.
#[test]
fn test_craps_out() {
    let rolls = RefCell::new(Vec::new());
    let mut engine = scripted_engine(&[(1, 1)], &rolls, |w, l| w + l == 0, |_| true);

    engine.play().unwrap();

    assert_eq!(engine.tally(), Tally::new(0, 1));
    assert_eq!(rolls.borrow().len(), 1);
}

#[test]
fn test_every_craps_and_natural_sum() {
    let cases = [
        ((1, 1), Tally::new(0, 1)),
        ((1, 2), Tally::new(0, 1)),
        ((6, 6), Tally::new(0, 1)),
        ((1, 6), Tally::new(1, 0)),
        ((5, 6), Tally::new(1, 0)),
    ];

    for ((a, b), expected) in cases {
        let rolls = RefCell::new(Vec::new());
        let mut engine = scripted_engine(&[(a, b)], &rolls, |w, l| w + l == 0, |_| true);
        engine.play().unwrap();
        assert_eq!(engine.tally(), expected, "come-out ({a}, {b})");
    }
}

// =============================================================================
// Point Scenarios
// =============================================================================

/// Round-start decider that starts the first round, then fails, freezing the
/// engine right after that round resolves.
fn one_round_then_fail() -> Fallible<impl FnMut(u32, u32) -> Result<bool, DecisionError>> {
    Fallible(|wins: u32, losses: u32| {
        if wins + losses == 0 {
            Ok(true)
        } else {
            Err(DecisionError::new("stop here"))
        }
    })
}

/// Scenario C: point 5, then 1+4 makes it.
#[test]
fn test_point_made() {
    let points = RefCell::new(Vec::new());
    let mut engine = RoundEngine::new(ScriptedDice::from_pairs(&[(2, 3), (1, 4)]))
        .with_roll_reporter(|_: Roll| {})
        .with_round_start_decider(one_round_then_fail())
        .with_point_decider(|point: Point| {
            points.borrow_mut().push(point.value());
            true
        });

    assert!(matches!(engine.play(), Err(EngineError::Decision(_))));

    assert_eq!(*points.borrow(), vec![5]);
    assert_eq!(engine.tally(), Tally::new(1, 0));
    assert_eq!(engine.phase(), Phase::ComeOut);
    assert_eq!(engine.point(), None);
}

/// Scenario D: point 5, then 3+4 sevens out.
#[test]
fn test_seven_out() {
    let mut engine = RoundEngine::new(ScriptedDice::from_pairs(&[(2, 3), (3, 4)]))
        .with_roll_reporter(|_: Roll| {})
        .with_round_start_decider(one_round_then_fail())
        .with_point_decider(|_: Point| true);

    assert!(matches!(engine.play(), Err(EngineError::Decision(_))));

    assert_eq!(engine.tally(), Tally::new(0, 1));
    assert_eq!(engine.phase(), Phase::ComeOut);
    assert_eq!(engine.point(), None);
    assert_eq!(engine.rolls(), 2);
}

/// Phase returns to come-out after a resolved point, so a second round starts.
#[test]
fn test_point_round_then_next_round() {
    let rolls = RefCell::new(Vec::new());
    let mut engine = scripted_engine(
        &[(4, 4), (2, 2), (6, 2), (5, 6)],
        &rolls,
        |w, l| w + l < 2,
        |_| true,
    );

    engine.play().unwrap();

    // 8 established, 4 ignored, 8 made, then an 11 natural
    assert_eq!(engine.tally(), Tally::new(2, 0));
    assert_eq!(engine.rolls(), 4);
}

#[test]
fn test_non_deciding_rolls_change_nothing() {
    let rolls = RefCell::new(Vec::new());
    let asked_on_point = RefCell::new(0);

    // Point 6; 2, 3, 4, 5, 8, 9, 10, 11, 12 all ignored; then abandon
    let script = [
        (3, 3),
        (1, 1),
        (1, 2),
        (2, 2),
        (2, 3),
        (4, 4),
        (4, 5),
        (5, 5),
        (5, 6),
        (6, 6),
    ];
    let mut engine = scripted_engine(&script, &rolls, |_, _| true, |_| {
        *asked_on_point.borrow_mut() += 1;
        *asked_on_point.borrow() < 10
    });

    engine.play().unwrap();

    // Only the abandonment counted
    assert_eq!(engine.tally(), Tally::new(0, 1));
    assert_eq!(engine.rolls(), 10);
}

// =============================================================================
// Decision Asymmetry
// =============================================================================

/// Declining before the first roll is a clean exit.
#[test]
fn test_clean_exit_before_rolling() {
    let rolls = RefCell::new(Vec::new());
    let mut engine = scripted_engine(&[], &rolls, |_, _| false, |_| true);

    engine.play().unwrap();

    assert_eq!(engine.tally(), Tally::default());
    assert_eq!(engine.phase(), Phase::Done);
    assert!(rolls.borrow().is_empty());
}

/// Scenario E: point 6, then the player walks away. One loss, session over,
/// and the round-start decider is never asked again.
#[test]
fn test_abandoned_point_is_loss_and_ends_session() {
    let rolls = RefCell::new(Vec::new());
    let asked = RefCell::new(0);

    let mut engine = scripted_engine(
        &[(2, 4)],
        &rolls,
        |_, _| {
            *asked.borrow_mut() += 1;
            true
        },
        |_| false,
    );

    engine.play().unwrap();

    assert_eq!(engine.tally(), Tally::new(0, 1));
    assert_eq!(engine.phase(), Phase::Done);
    assert_eq!(*asked.borrow(), 1);
    assert_eq!(engine.rolls(), 1);
}

#[test]
fn test_abandonment_after_wins_keeps_wins() {
    let rolls = RefCell::new(Vec::new());
    let mut engine = scripted_engine(&[(6, 5), (3, 4), (5, 5)], &rolls, |_, _| true, |_| false);

    engine.play().unwrap();

    assert_eq!(engine.tally(), Tally::new(2, 1));
}

// =============================================================================
// Callback Ordering
// =============================================================================

/// Every roll is reported once, before the next decision sees its result.
#[test]
fn test_report_precedes_decision() {
    let events = RefCell::new(Vec::new());

    let mut engine = RoundEngine::new(ScriptedDice::from_pairs(&[(1, 2), (2, 3), (2, 3)]))
        .with_roll_reporter(|roll: Roll| events.borrow_mut().push(format!("roll {}", roll.sum())))
        .with_round_start_decider(|wins: u32, losses: u32| {
            events.borrow_mut().push(format!("start {wins}-{losses}"));
            wins == 0
        })
        .with_point_decider(|point: Point| {
            events.borrow_mut().push(format!("point {point}"));
            true
        });

    engine.play().unwrap();

    assert_eq!(
        *events.borrow(),
        vec![
            "start 0-0",
            "roll 3",
            "start 0-1",
            "roll 5",
            "point 5",
            "roll 5",
            "start 1-1",
        ]
    );
}

#[test]
fn test_tallies_never_decrease_between_decisions() {
    let seen = RefCell::new(Vec::new());
    let mut engine = RoundEngine::seeded(99)
        .with_roll_reporter(|_: Roll| {})
        .with_round_start_decider(|wins: u32, losses: u32| {
            seen.borrow_mut().push((wins, losses));
            wins + losses < 200
        })
        .with_point_decider(|_: Point| true);

    engine.play().unwrap();

    let seen = seen.borrow();
    for pair in seen.windows(2) {
        let ((w0, l0), (w1, l1)) = (pair[0], pair[1]);
        assert!(w1 >= w0 && l1 >= l0);
        assert_eq!(w1 + l1, w0 + l0 + 1, "each round is decided exactly once");
    }
    assert_eq!(engine.tally().rounds(), 200);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_missing_callback_rolls_nothing() {
    let mut engine = RoundEngine::new(ScriptedDice::from_pairs(&[(3, 4)]))
        .with_roll_reporter(|_: Roll| {})
        .with_point_decider(|_: Point| true);

    let err = engine.play().unwrap_err();

    assert!(matches!(
        err,
        EngineError::MissingCallback(CallbackKind::RoundStartDecider)
    ));
    assert_eq!(engine.rolls(), 0);
    assert_eq!(engine.phase(), Phase::ComeOut);
}

#[test]
fn test_decider_error_propagates_without_rollback() {
    let mut engine = RoundEngine::new(ScriptedDice::from_pairs(&[(6, 5), (4, 6)]))
        .with_roll_reporter(|_: Roll| {})
        .with_round_start_decider(|_: u32, _: u32| true)
        .with_point_decider(Fallible(|_: Point| -> Result<bool, DecisionError> {
            Err(DecisionError::new("keyboard unplugged"))
        }));

    let err = engine.play().unwrap_err();

    assert_eq!(err.to_string(), "decider failed: keyboard unplugged");
    // The natural stays won; the point is still live
    assert_eq!(engine.tally(), Tally::new(1, 0));
    assert_eq!(engine.phase(), Phase::Point);
    assert_eq!(engine.point(), Point::from_sum(10));
}

#[test]
fn test_round_start_error_leaves_state() {
    let mut engine = RoundEngine::new(ScriptedDice::from_pairs(&[(1, 1)]))
        .with_roll_reporter(|_: Roll| {})
        .with_round_start_decider(Fallible(|wins: u32, losses: u32| {
            if wins + losses == 0 {
                Ok(true)
            } else {
                Err(DecisionError::new("gone"))
            }
        }))
        .with_point_decider(|_: Point| true);

    assert!(matches!(engine.play(), Err(EngineError::Decision(_))));
    assert_eq!(engine.tally(), Tally::new(0, 1));
    assert_eq!(engine.phase(), Phase::ComeOut);
}
