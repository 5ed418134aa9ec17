use super::adjacency::reduced_rest;
use super::duty::{has_max_sectors, is_early, is_late};
use super::{
    MAX_AIRCRAFT_CHANGES, MAX_CONSECUTIVE_EARLY, MAX_DUTIES, MAX_PAIRING_SPAN, MAX_TRANSPORTS,
};
use crate::duty::Duty;
use crate::time::Span;

/// No early duty directly after a duty-rest-duty stretch with reduced rest.
pub fn no_early_after_reduced_rest(duties: &[Duty]) -> bool {
    early_after_reduced_rest_at(duties).is_none()
}

/// Index of the early duty closing the first reduced-rest window.
pub(crate) fn early_after_reduced_rest_at(duties: &[Duty]) -> Option<usize> {
    let i = duties
        .windows(3)
        .position(|ds| reduced_rest(&ds[0], &ds[1]) && is_early(&ds[2]))?;
    tracing::debug!(duty = i + 2, "early duty after reduced rest");
    Some(i + 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sequence {
    Normal,
    AfterLate,
}

/// Returns `true` when a violation is found: an early duty right after one or
/// more late duties. Unlike the other rules, `false` means compliant.
pub fn no_early_after_late(duties: &[Duty]) -> bool {
    early_after_late_at(duties).is_some()
}

pub(crate) fn early_after_late_at(duties: &[Duty]) -> Option<usize> {
    let mut state = Sequence::Normal;
    for (i, duty) in duties.iter().enumerate() {
        if is_late(duty) {
            state = Sequence::AfterLate;
        } else if state == Sequence::AfterLate {
            if is_early(duty) {
                tracing::debug!(duty = i, "early duty after late duty");
                return Some(i);
            }
            state = Sequence::Normal;
        }
    }
    None
}

/// A duty that follows reduced rest carries at most three legs with exactly
/// one transport. Only the rest directly before the duty counts.
pub fn max_sectors(duties: &[Duty]) -> bool {
    too_many_sectors_at(duties).is_none()
}

pub(crate) fn too_many_sectors_at(duties: &[Duty]) -> Option<usize> {
    let i = duties.windows(3).position(|ds| {
        let after_reduced_rest = reduced_rest(&ds[0], &ds[1]);
        after_reduced_rest && !has_max_sectors(&ds[2])
    })?;
    tracing::debug!(
        duty = i + 2,
        legs = duties[i + 2].legs().len(),
        "too many sectors after reduced rest"
    );
    Some(i + 2)
}

/// No more than three early duties in a row.
pub fn max_early_duties(duties: &[Duty]) -> bool {
    too_many_early_at(duties).is_none()
}

pub(crate) fn too_many_early_at(duties: &[Duty]) -> Option<usize> {
    let mut consecutive = 0usize;
    for (i, duty) in duties.iter().enumerate() {
        if !is_early(duty) {
            consecutive = 0;
            continue;
        }
        consecutive += 1;
        if consecutive > MAX_CONSECUTIVE_EARLY {
            tracing::debug!(duty = i, consecutive, "too many consecutive early duties");
            return Some(i);
        }
    }
    None
}

pub fn max_duty(duties: &[Duty]) -> bool {
    duties.len() <= MAX_DUTIES
}

/// First departure to last arrival of the whole sequence spans no more than
/// four days. An empty sequence is never compliant.
pub fn max_pairing_length(duties: &[Duty]) -> bool {
    match (duties.first(), duties.last()) {
        (Some(first), Some(last)) => {
            Span::between(first.first_leg().dep_utc, last.last_leg().arr_utc) <= MAX_PAIRING_SPAN
        }
        _ => false,
    }
}

pub fn max_transports(duties: &[Duty]) -> bool {
    duties.iter().map(Duty::transports).sum::<usize>() <= MAX_TRANSPORTS
}

/// Aircraft changes are found leg to leg inside each duty, never across a
/// duty boundary, and counted over the whole sequence.
pub fn max_aircraft_changes(duties: &[Duty]) -> bool {
    too_many_aircraft_changes_at(duties).is_none()
}

pub(crate) fn too_many_aircraft_changes_at(duties: &[Duty]) -> Option<usize> {
    let mut changes = 0usize;
    for (i, duty) in duties.iter().enumerate() {
        for (prev, next) in duty.aircraft_changes() {
            changes += 1;
            if changes > MAX_AIRCRAFT_CHANGES {
                tracing::debug!(
                    duty = i,
                    from = %prev,
                    to = %next,
                    changes,
                    "too many aircraft changes"
                );
                return Some(i);
            }
        }
    }
    None
}
