// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster store: athlete and volunteer records.
//!
//! Records are created and edited here but never deleted. Role ids given to
//! an entity are stored as-is (minus duplicates); whether they name an
//! existing role is the role registry's concern.

use crate::error::CoreError;
use crate::state::RosterState;
use practice_roster_domain::{
    Athlete, AthleteId, DomainError, EntityKind, RoleId, Volunteer, VolunteerId, normalize_name,
    normalize_notes, normalize_role_ids,
};

impl RosterState {
    /// Adds an athlete to the roster.
    ///
    /// The athlete starts out checked out and unassigned. Notes are stored
    /// under the new id, as an empty string when none were given.
    ///
    /// # Arguments
    ///
    /// * `name` - The athlete's name
    /// * `notes` - Free-text notes
    /// * `role_ids` - Athlete-namespace role ids
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming. The roster is
    /// left untouched in that case.
    pub fn add_athlete(
        &mut self,
        name: &str,
        notes: &str,
        role_ids: Vec<RoleId>,
    ) -> Result<AthleteId, CoreError> {
        let name: String = normalize_name(EntityKind::Athlete, name)?;

        let athlete_id: AthleteId = self.fresh_athlete_id();
        self.athletes.push(Athlete::new(
            athlete_id.clone(),
            name,
            normalize_role_ids(role_ids),
        ));
        self.athlete_notes
            .insert(athlete_id.clone(), normalize_notes(notes));

        Ok(athlete_id)
    }

    /// Replaces an athlete's name, notes and roles.
    ///
    /// This is a full replace: the given role ids become the athlete's
    /// complete role set.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty after trimming
    /// - The athlete does not exist
    pub fn update_athlete(
        &mut self,
        athlete_id: &AthleteId,
        name: &str,
        notes: &str,
        role_ids: Vec<RoleId>,
    ) -> Result<(), CoreError> {
        let name: String = normalize_name(EntityKind::Athlete, name)?;

        let athlete: &mut Athlete = self
            .athletes
            .iter_mut()
            .find(|athlete| &athlete.id == athlete_id)
            .ok_or_else(|| DomainError::AthleteNotFound(athlete_id.clone()))?;

        athlete.name = name;
        athlete.roles = normalize_role_ids(role_ids);
        self.athlete_notes
            .insert(athlete_id.clone(), normalize_notes(notes));

        Ok(())
    }

    /// Adds a volunteer to the roster.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming.
    pub fn add_volunteer(
        &mut self,
        name: &str,
        role_ids: Vec<RoleId>,
    ) -> Result<VolunteerId, CoreError> {
        let name: String = normalize_name(EntityKind::Volunteer, name)?;

        let volunteer_id: VolunteerId = self.fresh_volunteer_id();
        self.volunteers.push(Volunteer::new(
            volunteer_id.clone(),
            name,
            normalize_role_ids(role_ids),
        ));

        Ok(volunteer_id)
    }

    /// Replaces a volunteer's name and roles.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The name is empty after trimming
    /// - The volunteer does not exist
    pub fn update_volunteer(
        &mut self,
        volunteer_id: &VolunteerId,
        name: &str,
        role_ids: Vec<RoleId>,
    ) -> Result<(), CoreError> {
        let name: String = normalize_name(EntityKind::Volunteer, name)?;

        let volunteer: &mut Volunteer = self
            .volunteers
            .iter_mut()
            .find(|volunteer| &volunteer.id == volunteer_id)
            .ok_or_else(|| DomainError::VolunteerNotFound(volunteer_id.clone()))?;

        volunteer.name = name;
        volunteer.roles = normalize_role_ids(role_ids);

        Ok(())
    }

    /// Looks up an athlete by id.
    #[must_use]
    pub fn find_athlete(&self, athlete_id: &AthleteId) -> Option<&Athlete> {
        self.athletes
            .iter()
            .find(|athlete| &athlete.id == athlete_id)
    }

    /// Looks up a volunteer by id.
    #[must_use]
    pub fn find_volunteer(&self, volunteer_id: &VolunteerId) -> Option<&Volunteer> {
        self.volunteers
            .iter()
            .find(|volunteer| &volunteer.id == volunteer_id)
    }

    /// Returns the notes for an athlete, or an empty string if none exist.
    #[must_use]
    pub fn athlete_notes(&self, athlete_id: &AthleteId) -> &str {
        self.athlete_notes
            .get(athlete_id)
            .map_or("", String::as_str)
    }

    fn fresh_athlete_id(&self) -> AthleteId {
        loop {
            let candidate: AthleteId = AthleteId::generate();
            if self.find_athlete(&candidate).is_none() {
                return candidate;
            }
        }
    }

    fn fresh_volunteer_id(&self) -> VolunteerId {
        loop {
            let candidate: VolunteerId = VolunteerId::generate();
            if self.find_volunteer(&candidate).is_none() {
                return candidate;
            }
        }
    }
}
