use super::adjacency::short_sit_at;
use super::duty::{max_duty_days, rest_time};
use super::sequence::{
    early_after_late_at, early_after_reduced_rest_at, max_duty, max_pairing_length,
    max_transports, too_many_aircraft_changes_at, too_many_early_at, too_many_sectors_at,
};
use crate::duty::Duty;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    RestTime,
    MaxDutyDays,
    MinSittime,
    NoEarlyAfterReducedRest,
    NoEarlyAfterLate,
    MaxSectors,
    MaxEarlyDuties,
    MaxDuty,
    MaxPairingLength,
    MaxTransports,
    MaxAircraftChanges,
}

/// Outcome of one rule over one duty sequence. `duty` points at the first
/// offending duty when the rule can name one; whole-pairing limits leave it
/// empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Compliant,
    Violated { duty: Option<usize> },
}

impl Verdict {
    fn from_compliance(compliant: bool) -> Verdict {
        if compliant {
            Verdict::Compliant
        } else {
            Verdict::Violated { duty: None }
        }
    }

    fn at(offender: Option<usize>) -> Verdict {
        match offender {
            Some(i) => Verdict::Violated { duty: Some(i) },
            None => Verdict::Compliant,
        }
    }

    pub fn is_compliant(&self) -> bool {
        matches!(self, Verdict::Compliant)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Compliant => write!(f, "OK"),
            Verdict::Violated { duty: None } => write!(f, "VIOLATED"),
            Verdict::Violated { duty: Some(i) } => write!(f, "VIOLATED (duty {})", i + 1),
        }
    }
}

impl Rule {
    pub const ALL: [Rule; 11] = [
        Rule::RestTime,
        Rule::MaxDutyDays,
        Rule::MinSittime,
        Rule::NoEarlyAfterReducedRest,
        Rule::NoEarlyAfterLate,
        Rule::MaxSectors,
        Rule::MaxEarlyDuties,
        Rule::MaxDuty,
        Rule::MaxPairingLength,
        Rule::MaxTransports,
        Rule::MaxAircraftChanges,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Rule::RestTime => "rest-time",
            Rule::MaxDutyDays => "max-duty-days",
            Rule::MinSittime => "min-sittime",
            Rule::NoEarlyAfterReducedRest => "no-early-after-reduced-rest",
            Rule::NoEarlyAfterLate => "no-early-after-late",
            Rule::MaxSectors => "max-sectors",
            Rule::MaxEarlyDuties => "max-early-duties",
            Rule::MaxDuty => "max-duty",
            Rule::MaxPairingLength => "max-pairing-length",
            Rule::MaxTransports => "max-transports",
            Rule::MaxAircraftChanges => "max-aircraft-changes",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Rule::RestTime => "Aircraft change within a duty needs 50 min on ground",
            Rule::MaxDutyDays => "Duty spans at most 2 days",
            Rule::MinSittime => "1h40 sit time after a duty opening with a transport",
            Rule::NoEarlyAfterReducedRest => "No early duty after reduced rest",
            Rule::NoEarlyAfterLate => "No early duty directly after a late duty",
            Rule::MaxSectors => "Max 3 legs with 1 transport after reduced rest",
            Rule::MaxEarlyDuties => "At most 3 consecutive early duties",
            Rule::MaxDuty => "At most 4 duties",
            Rule::MaxPairingLength => "Pairing spans at most 4 days",
            Rule::MaxTransports => "At most 10 transport legs",
            Rule::MaxAircraftChanges => "At most 2 aircraft changes",
        }
    }

    pub fn check(&self, duties: &[Duty]) -> Verdict {
        match self {
            Rule::RestTime => Self::check_each(duties, rest_time),
            Rule::MaxDutyDays => Self::check_each(duties, max_duty_days),
            Rule::MinSittime => Verdict::at(short_sit_at(duties)),
            Rule::NoEarlyAfterReducedRest => Verdict::at(early_after_reduced_rest_at(duties)),
            Rule::NoEarlyAfterLate => Verdict::at(early_after_late_at(duties)),
            Rule::MaxSectors => Verdict::at(too_many_sectors_at(duties)),
            Rule::MaxEarlyDuties => Verdict::at(too_many_early_at(duties)),
            Rule::MaxDuty => Verdict::from_compliance(max_duty(duties)),
            Rule::MaxPairingLength => Verdict::from_compliance(max_pairing_length(duties)),
            Rule::MaxTransports => Verdict::from_compliance(max_transports(duties)),
            Rule::MaxAircraftChanges => Verdict::at(too_many_aircraft_changes_at(duties)),
        }
    }

    fn check_each(duties: &[Duty], rule: fn(&Duty) -> bool) -> Verdict {
        Verdict::at(duties.iter().position(|d| !rule(d)))
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Runs every rule independently, in catalogue order.
pub fn evaluate(duties: &[Duty]) -> Vec<(Rule, Verdict)> {
    Rule::ALL
        .iter()
        .map(|rule| {
            let verdict = rule.check(duties);
            tracing::trace!(rule = %rule, %verdict, "rule evaluated");
            (*rule, verdict)
        })
        .collect()
}
