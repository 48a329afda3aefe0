//! End-to-end behaviour of the abacus through its public API: clicks at
//! drawn bead positions, place-value modes, reset and rebuild.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use soroban_trainer::{Abacus, AbacusError, BeadKind, PlaceValueMode, Point, Rod};

/// Center of a bead as currently drawn.
fn bead_at(abacus: &Abacus, rod: usize, kind: BeadKind) -> Point {
    let bead = abacus.rods()[rod]
        .beads()
        .iter()
        .find(|b| b.kind() == kind)
        .unwrap();
    abacus.layout().bead_center(rod, bead)
}

fn click(abacus: &mut Abacus, rod: usize, kind: BeadKind) -> bool {
    let at = bead_at(abacus, rod, kind);
    abacus.handle_click(at)
}

fn digits(abacus: &Abacus) -> Vec<u8> {
    abacus.rods().iter().map(Rod::value).collect()
}

fn active_earth_ranks(rod: &Rod) -> Vec<u8> {
    rod.earth()
        .iter()
        .filter(|b| b.is_active())
        .map(|b| b.rank())
        .collect()
}

// ============================================================================
// Clicking through drawn positions
// ============================================================================

#[test]
fn clicking_builds_one_hundred_nine() {
    let mut abacus = Abacus::new(3).unwrap();
    assert!(click(&mut abacus, 0, BeadKind::Earth(1)));
    assert!(click(&mut abacus, 2, BeadKind::Heaven));
    assert!(click(&mut abacus, 2, BeadKind::Earth(4)));
    assert_eq!(digits(&abacus), vec![1, 0, 9]);
    assert_eq!(abacus.formatted_value(), "109");
}

#[test]
fn decimal_mode_five_point_two_zero() {
    let mut abacus = Abacus::new(5).unwrap();
    abacus
        .set_place_value_mode(PlaceValueMode::Decimal { pivot: 2 })
        .unwrap();
    click(&mut abacus, 2, BeadKind::Heaven);
    click(&mut abacus, 3, BeadKind::Earth(2));
    assert_eq!(digits(&abacus), vec![0, 0, 5, 2, 0]);
    assert_eq!(abacus.formatted_value(), "5.20");
}

#[test]
fn active_heaven_bead_is_hit_where_it_is_drawn() {
    let mut abacus = Abacus::new(2).unwrap();
    click(&mut abacus, 1, BeadKind::Heaven);
    let at = bead_at(&abacus, 1, BeadKind::Heaven);
    let inside = Point::new(at.x + 5.0, at.y - 5.0);
    let hit = abacus.hit_test(inside).unwrap();
    assert_eq!(hit.rod, 1);
    assert!(hit.bead.is_heaven());
    assert!(hit.bead.is_active());
}

#[test]
fn gap_left_by_inactive_earth_bead_is_empty() {
    let abacus = Abacus::new(1).unwrap();
    let layout = abacus.layout();
    // With nothing active, slot 0 (where bead 1 would sit when active) is empty.
    let gap = Point::new(layout.rod_x(0), layout.bar_y() + layout.bead_height / 2.0);
    assert!(abacus.hit_test(gap).is_none());
}

#[test]
fn reset_then_zero_in_both_modes() {
    let mut abacus = Abacus::new(4).unwrap();
    abacus.set_value("9876").unwrap();
    abacus.reset();
    assert_eq!(abacus.formatted_value(), "0");
    assert_eq!(abacus.rod_count(), 4);

    abacus
        .set_place_value_mode(PlaceValueMode::Decimal { pivot: 1 })
        .unwrap();
    abacus.set_value("12.34").unwrap();
    abacus.reset();
    assert_eq!(abacus.formatted_value(), "0.00");
}

#[test]
fn rebuild_starts_from_scratch() {
    let mut abacus = Abacus::new(3).unwrap();
    abacus.set_value("999").unwrap();
    abacus.rebuild(3).unwrap();
    assert_eq!(abacus.formatted_value(), "0");
    abacus.rebuild(6).unwrap();
    assert_eq!(digits(&abacus), vec![0; 6]);
}

#[test]
fn programmer_errors_fail_fast() {
    assert!(matches!(Abacus::new(0), Err(AbacusError::RodCount(0))));

    let mut abacus = Abacus::new(2).unwrap();
    assert!(matches!(
        abacus.set_place_value_mode(PlaceValueMode::Decimal { pivot: 2 }),
        Err(AbacusError::Pivot { pivot: 2, rod_count: 2 })
    ));
    assert!(matches!(
        abacus.rod_mut(0).unwrap().toggle_earth_bead(7),
        Err(AbacusError::EarthRank(7))
    ));
    assert!(matches!(
        abacus.rod_mut(2),
        Err(AbacusError::RodIndex { index: 2, rod_count: 2 })
    ));
}

#[test]
fn error_messages_name_the_bad_input() {
    let err = Abacus::new(0).unwrap_err();
    assert_eq!(err.to_string(), "an abacus needs at least one rod, got 0");
    let err = Abacus::new(1).unwrap().set_value("12").unwrap_err();
    assert_eq!(err.to_string(), "cannot show \"12\" on this abacus");
}

#[test]
fn painting_does_not_touch_the_model() {
    use soroban_trainer::{PaintOptions, ThemeName, render_svg};

    let mut abacus = Abacus::new(5).unwrap();
    abacus.set_value("40213").unwrap();
    let before = digits(&abacus);
    let svg = render_svg(&abacus, &ThemeName::Wood.palette(), &PaintOptions::default());
    assert!(svg.contains(">40213</text>"));
    assert_eq!(digits(&abacus), before);
}

// ============================================================================
// Properties of the earth-bead protocol
// ============================================================================

proptest! {
    #[test]
    fn earth_beads_stay_a_contiguous_prefix(ranks in prop::collection::vec(1u8..=4, 0..40)) {
        let mut abacus = Abacus::new(1).unwrap();
        let rod = abacus.rod_mut(0).unwrap();
        for rank in ranks {
            rod.toggle_earth_bead(rank).unwrap();
            let count = rod.earth_count();
            prop_assert_eq!(active_earth_ranks(rod), (1..=count).collect::<Vec<u8>>());
        }
    }

    #[test]
    fn toggle_goes_to_rank_or_one_below(
        start in 0u8..=4,
        rank in 1u8..=4,
        heaven in any::<bool>(),
    ) {
        let mut abacus = Abacus::new(1).unwrap();
        let rod = abacus.rod_mut(0).unwrap();
        rod.set_value(start + if heaven { 5 } else { 0 }).unwrap();

        rod.toggle_earth_bead(rank).unwrap();
        let first = rod.earth_count();
        let expected = if start == rank { rank - 1 } else { rank };
        prop_assert_eq!(first, expected);

        // A second click on the same rank never lands back on the same state.
        rod.toggle_earth_bead(rank).unwrap();
        prop_assert_ne!(rod.earth_count(), first);
        prop_assert!(rod.earth_count() == rank || rod.earth_count() == rank - 1);

        prop_assert_eq!(rod.heaven().is_active(), heaven);
        prop_assert_eq!(rod.value(), 5 * heaven as u8 + rod.earth_count());
    }

    #[test]
    fn clicks_anywhere_keep_value_consistent(
        points in prop::collection::vec((0.0f32..400.0, 0.0f32..350.0), 0..60),
    ) {
        let mut abacus = Abacus::new(5).unwrap();
        for (x, y) in points {
            abacus.handle_click(Point::new(x, y));
        }
        let mut text = String::new();
        for rod in abacus.rods() {
            prop_assert_eq!(active_earth_ranks(rod), (1..=rod.earth_count()).collect::<Vec<u8>>());
            text.push(char::from(b'0' + rod.value()));
        }
        let trimmed = text.trim_start_matches('0');
        let expected = if trimmed.is_empty() { "0" } else { trimmed };
        prop_assert_eq!(abacus.formatted_value(), expected);
    }
}
