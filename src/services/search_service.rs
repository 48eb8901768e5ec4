use crate::dto::search_dto::SearchFilters;
use crate::models::job::Job;

/// Normalized form of [`SearchFilters`]: lowercased, blanks dropped. Skill
/// tokens are trimmed; position and location text is matched as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    position: Option<String>,
    location: Option<String>,
    skills: Vec<String>,
}

fn needle(raw: &str) -> Option<String> {
    (!raw.trim().is_empty()).then(|| raw.to_lowercase())
}

impl From<&SearchFilters> for SearchCriteria {
    fn from(filters: &SearchFilters) -> Self {
        let skills = filters
            .skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
            .collect();

        Self {
            position: needle(&filters.position),
            location: needle(&filters.location),
            skills,
        }
    }
}

impl SearchCriteria {
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.location.is_none() && self.skills.is_empty()
    }

    pub fn matches(&self, job: &Job) -> bool {
        let position_ok = self
            .position
            .as_deref()
            .map_or(true, |p| job.title.to_lowercase().contains(p));
        let location_ok = self
            .location
            .as_deref()
            .map_or(true, |l| job.location.to_lowercase().contains(l));

        position_ok && location_ok && self.matches_skills(job)
    }

    // Any one query skill overlapping any one job skill is enough.
    fn matches_skills(&self, job: &Job) -> bool {
        if self.skills.is_empty() {
            return true;
        }
        let job_skills: Vec<String> = job.skills.iter().map(|s| s.to_lowercase()).collect();
        self.skills
            .iter()
            .any(|wanted| job_skills.iter().any(|have| have.contains(wanted.as_str())))
    }
}

/// Stable filter: the result is a subsequence of `jobs` in input order.
pub fn filter_jobs(jobs: &[Job], filters: &SearchFilters) -> Vec<Job> {
    let criteria = SearchCriteria::from(filters);
    if criteria.is_empty() {
        return jobs.to_vec();
    }
    jobs.iter()
        .filter(|job| criteria.matches(job))
        .cloned()
        .collect()
}
