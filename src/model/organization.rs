//! Organizational vocabularies: sectors, systems, committees and the job ladder.

use chrono::Duration;

use crate::model::vocabulary::{vocabulary, Vocabulary};

vocabulary! {
    /// Operational sectors a member can be assigned to.
    pub enum Sector {
        Recruitment => "Recruitment",
        Training => "Training",
        Patrol => "Patrol",
        Traffic => "Traffic",
        Investigation => "Investigation",
        Intelligence => "Intelligence",
        Tactical => "Tactical",
        Logistics => "Logistics",
        Communications => "Communications",
        InternalAffairs => "InternalAffairs",
    }
}

vocabulary! {
    /// Administrative systems a member can be placed in (leave, renewal, discipline).
    pub enum System {
        Leave => "Leave",
        Renewal => "Renewal",
        Warning => "Warning",
        Suspension => "Suspension",
    }
}

vocabulary! {
    /// Standing committees of the organization.
    pub enum Committee {
        Ethics => "Ethics",
        Events => "Events",
        Evaluation => "Evaluation",
        Discipline => "Discipline",
    }
}

vocabulary! {
    /// Job ladder, lowest rank first.
    pub enum Job {
        Recruit => "Recruit",
        Cadet => "Cadet",
        Officer => "Officer",
        Corporal => "Corporal",
        Sergeant => "Sergeant",
        Lieutenant => "Lieutenant",
        Captain => "Captain",
        Major => "Major",
        Colonel => "Colonel",
        Commander => "Commander",
    }
}

impl Job {
    /// Rank every new member starts at.
    pub const ENTRY: Job = Job::Recruit;

    /// Returns the job directly above this one, or `None` at the top of the ladder.
    pub fn next(self) -> Option<Job> {
        let position = Self::ALL.iter().position(|job| *job == self)?;
        Self::ALL.get(position + 1).copied()
    }

    /// Minimum time a member must hold this job before being promoted to the next one.
    ///
    /// # Returns
    /// - `Some(Duration)` - Required time in this job
    /// - `None` - Top of the ladder, no further promotion exists
    pub fn promotion_delay(self) -> Option<Duration> {
        let days = match self {
            Job::Recruit => 3,
            Job::Cadet => 7,
            Job::Officer => 14,
            Job::Corporal => 21,
            Job::Sergeant => 30,
            Job::Lieutenant => 45,
            Job::Captain => 60,
            Job::Major => 90,
            Job::Colonel => 120,
            Job::Commander => return None,
        };

        Some(Duration::days(days))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests that the sector vocabulary has exactly ten members.
    #[test]
    fn sector_vocabulary_has_ten_members() {
        assert_eq!(Sector::ALL.len(), 10);
        assert_eq!(
            Sector::parse("SECTOR", "InternalAffairs").unwrap(),
            Sector::InternalAffairs
        );
    }

    /// Tests walking the job ladder from bottom to top.
    ///
    /// Expected: every job but the last has a next job and a promotion delay
    #[test]
    fn job_ladder_is_connected() {
        let mut job = Job::ENTRY;
        let mut steps = 0;

        while let Some(next) = job.next() {
            assert!(job.promotion_delay().is_some());
            assert!(next > job);
            job = next;
            steps += 1;
        }

        assert_eq!(job, Job::Commander);
        assert_eq!(steps, Job::ALL.len() - 1);
        assert!(Job::Commander.promotion_delay().is_none());
    }

    /// Tests that promotion delays never shrink going up the ladder.
    #[test]
    fn promotion_delays_are_non_decreasing() {
        let delays: Vec<Duration> = Job::ALL
            .iter()
            .filter_map(|job| job.promotion_delay())
            .collect();

        assert!(delays.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(Job::Sergeant.promotion_delay(), Some(Duration::days(30)));
    }
}
