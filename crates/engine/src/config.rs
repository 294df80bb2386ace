//! Vocabulary configuration for the extraction pipeline.
//!
//! All lookup tables are immutable data injected at `Engine` construction
//! and never mutated at runtime, which keeps every extractor a pure
//! function of (text, vocabularies).

use std::collections::HashSet;

/// Technical and soft skills the skill extractor recognizes. The extractor
/// only ever emits entries from this closed set; downstream scoring and
/// matching rely on set membership being meaningful.
const SKILLS: &[&str] = &[
    "Python",
    "Java",
    "C++",
    "JavaScript",
    "React",
    "Node.js",
    "SQL",
    "NoSQL",
    "MongoDB",
    "AWS",
    "Azure",
    "Docker",
    "Kubernetes",
    "Machine Learning",
    "Deep Learning",
    "Data Science",
    "Pandas",
    "NumPy",
    "Scikit-learn",
    "TensorFlow",
    "PyTorch",
    "Git",
    "CI/CD",
    "Agile",
    "Scrum",
    "Communication",
    "Leadership",
    "Problem Solving",
];

/// Role titles scanned for in the resume header, most specific first.
/// Order matters: the title extractor returns the first vocabulary entry
/// that hits, so generic seniority words sit at the end.
const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "Project Manager",
    "Business Analyst",
    "DevOps Engineer",
    "Full Stack Developer",
    "Frontend Developer",
    "Backend Developer",
    "Machine Learning Engineer",
    "Data Engineer",
    "System Administrator",
    "Network Engineer",
    "QA Engineer",
    "UI/UX Designer",
    "Graphic Designer",
    "Marketing Manager",
    "Sales Manager",
    "Accountant",
    "HR Manager",
    "Consultant",
    "Director",
    "VP",
    "Chief",
    "Lead",
    "Senior",
    "Junior",
    "Associate",
    "Intern",
];

/// Sections a well-structured resume is expected to contain.
const SECTIONS: &[&str] = &[
    "experience",
    "education",
    "skills",
    "projects",
    "summary",
    "objective",
];

/// Words that mark a header line as something other than a candidate name:
/// structural headers, contact labels, and seniority/role words.
const HEADER_STOPWORDS: &[&str] = &[
    "resume",
    "cv",
    "curriculum",
    "vitae",
    "profile",
    "summary",
    "experience",
    "education",
    "contact",
    "email",
    "phone",
    "address",
    "skills",
    "projects",
    "references",
    "languages",
    "certifications",
    "senior",
    "junior",
    "associate",
    "lead",
    "manager",
    "director",
    "vp",
    "engineer",
    "developer",
    "architect",
    "consultant",
    "analyst",
    "intern",
];

/// Closed vocabularies driving extraction and scoring. Substituting a
/// different skill set preserves the contract that only members of the
/// injected set can appear in extracted output.
#[derive(Debug, Clone)]
pub struct Vocabularies {
    /// Canonical display casing; matched case-insensitively.
    pub skills: Vec<String>,
    pub job_titles: Vec<String>,
    /// Lowercase section names checked as substrings of the raw text.
    pub sections: Vec<String>,
    pub header_stopwords: Vec<String>,
}

impl Default for Vocabularies {
    fn default() -> Self {
        let to_owned = |table: &[&str]| table.iter().map(|s| s.to_string()).collect();
        Self {
            skills: to_owned(SKILLS),
            job_titles: to_owned(JOB_TITLES),
            sections: to_owned(SECTIONS),
            header_stopwords: to_owned(HEADER_STOPWORDS),
        }
    }
}

impl Vocabularies {
    /// Lowercased token set a plausible name line must not contain:
    /// every skill term plus the structural header words.
    pub(crate) fn forbidden_name_tokens(&self) -> HashSet<String> {
        self.skills
            .iter()
            .chain(self.header_stopwords.iter())
            .map(|s| s.to_lowercase())
            .collect()
    }
}
