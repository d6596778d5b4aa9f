//! Record synthesizer: random candidates and their generation prompts

use crate::error::Result;
use crate::pipeline::GenerationRequest;
use rand::seq::SliceRandom;
use rand::Rng;
use resume_types::CandidateInput;
use std::path::Path;

/// Job titles a synthesized candidate can apply for
pub const JOBS: &[&str] = &[
    "AI Engineer",
    "Agile Coach",
    "Algorithm Engineer",
    "Applied Scientist",
    "Automation QA",
    "BI Developer",
    "Backend Developer",
    "Blockchain Developer",
    "Business Intelligence Analyst",
    "CDO",
    "CTO",
    "Cloud Engineer",
    "Computational Scientist",
    "Computer Vision Engineer",
    "Cybersecurity Specialist",
    "Data Analyst",
    "Data Architect",
    "Data Engineer",
    "Data Quality Engineer",
    "Data Scientist",
    "Data Steward",
    "Database Administrator",
    "DevOps Engineer",
    "Developer",
    "Embedded Systems Engineer",
    "Engineering Manager",
    "Firmware Engineer",
    "Frontend Developer",
    "Full Stack Developer",
    "Head of Data",
    "Head of Engineering",
    "IT Project Manager",
    "Integration Engineer",
    "Interaction Designer",
    "MLOps Engineer",
    "Machine Learning Engineer",
    "Mobile Developer",
    "Motion Designer",
    "NLP Engineer",
    "Network Engineer",
    "Platform Engineer",
    "Product Analyst",
    "Product Designer",
    "Product Manager",
    "Product Owner",
    "Project Manager",
    "QA Engineer",
    "Quantitative Analyst",
    "Research Scientist",
    "Researcher",
    "Scrum Master",
    "Security Engineer",
    "Site Reliability Engineer",
    "Software Engineer",
    "Solutions Architect",
    "System Analyst",
    "Technical Lead",
    "Tester",
    "UI Developer",
    "UX Researcher",
    "UX/UI Designer",
];

const FIRST_NAMES: &[&str] = &[
    "Alice", "Boris", "Carmen", "Dmitri", "Elena", "Felix", "Greta", "Hugo", "Irina", "Jonas",
    "Katya", "Lukas", "Maria", "Nikita", "Olga", "Pavel", "Quentin", "Rosa", "Stefan", "Tamara",
    "Ulrich", "Vera", "Wanda", "Xenia", "Yuri", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Adler", "Baranov", "Castillo", "Dvorak", "Egorov", "Fischer", "Gruber", "Hansen", "Ivanov",
    "Jensen", "Kovalenko", "Larsen", "Meier", "Novak", "Orlov", "Petrov", "Quint", "Richter",
    "Smirnov", "Tikhonov", "Ullmann", "Volkov", "Weber", "Ybarra", "Zimmermann",
];

const COUNTRIES: &[&str] = &[
    "Germany", "Kazakhstan", "Belarus", "Poland", "Netherlands", "Portugal", "Serbia", "Georgia",
    "Armenia", "Czechia", "Spain", "Canada",
];

/// Produces the sequence of generation requests for a batch.
///
/// Has no dependency on the pipeline itself; the coordinator drives it and
/// feeds the resulting requests into the work queue.
pub struct CandidateSynthesizer {
    prompt_template: String,
}

impl CandidateSynthesizer {
    pub fn new(prompt_template: String) -> Self {
        Self { prompt_template }
    }

    /// Load the prompt template from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let prompt_template = std::fs::read_to_string(path)?;
        Ok(Self::new(prompt_template))
    }

    /// Synthesize one random candidate
    pub fn random_candidate(&self) -> CandidateInput {
        let mut rng = rand::thread_rng();

        let first = FIRST_NAMES.choose(&mut rng).copied().unwrap_or("Alex");
        let last = LAST_NAMES.choose(&mut rng).copied().unwrap_or("Smith");
        let job = JOBS.choose(&mut rng).copied().unwrap_or("Developer");
        let country = COUNTRIES.choose(&mut rng).copied().unwrap_or("Germany");

        CandidateInput {
            name: format!("{} {}", first, last),
            phone_number: format!(
                "+{} {:03} {:03}-{:02}-{:02}",
                rng.gen_range(1..100),
                rng.gen_range(0..1000),
                rng.gen_range(0..1000),
                rng.gen_range(0..100),
                rng.gen_range(0..100)
            ),
            desired_job: job.to_string(),
            years_of_experience: rng.gen_range(0..=15),
            location: country.to_string(),
        }
    }

    /// Build the prompt for a candidate by substituting the `{candidate}`
    /// placeholder with the candidate JSON
    pub fn prompt_for(&self, candidate: &CandidateInput) -> Result<String> {
        let candidate_json = serde_json::to_string(candidate)?;
        Ok(self.prompt_template.replace("{candidate}", &candidate_json))
    }

    /// Synthesize one complete generation request
    pub fn request(&self) -> Result<GenerationRequest> {
        let candidate = self.random_candidate();
        let prompt = self.prompt_for(&candidate)?;
        Ok(GenerationRequest::new(candidate, prompt))
    }
}
