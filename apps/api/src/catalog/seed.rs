//! Built-in demo catalog, used when no `CATALOG_PATH` is configured.

use crate::models::{CompanySize, JobPosting};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn seed_jobs() -> Vec<JobPosting> {
    vec![
        JobPosting {
            id: 1,
            title: "Senior Full-Stack Engineer".to_string(),
            company: "Stripe".to_string(),
            location: "Bangalore, India".to_string(),
            salary_min: 4_500_000,
            salary_max: 5_500_000,
            requirements: strings(&[
                "React",
                "Node.js",
                "TypeScript",
                "PostgreSQL",
                "AWS",
                "Docker",
            ]),
            preferred_skills: strings(&["GraphQL", "Kubernetes", "Microservices"]),
            description: "Build payment infrastructure used by millions. Strong engineering \
                culture with code reviews, testing, and documentation. Competitive benefits \
                including health insurance, learning budget, and WLB focus."
                .to_string(),
            company_size: CompanySize::Global,
            uses_ats: true,
            employment_type: Some("Full-time".to_string()),
            remote: Some("Hybrid".to_string()),
            salary_label: Some("₹45-55 LPA".to_string()),
            experience: Some("5+ years".to_string()),
            funding: Some("Public".to_string()),
            glassdoor_rating: Some(4.5),
        },
        JobPosting {
            id: 2,
            title: "Founding Engineer".to_string(),
            company: "Stealth AI Startup".to_string(),
            location: "Remote".to_string(),
            salary_min: 800_000,
            salary_max: 1_200_000,
            requirements: strings(&["React", "Python", "TensorFlow", "AWS"]),
            preferred_skills: strings(&["Fast learner", "Hustle"]),
            description: "Need a rockstar ninja to hustle 24/7 building our revolutionary AI \
                platform. Must wear many hats and be available urgently. We're a family here \
                and need someone passionate who can hit the ground running!"
                .to_string(),
            company_size: CompanySize::Micro,
            uses_ats: false,
            employment_type: Some("Full-time".to_string()),
            remote: Some("Remote".to_string()),
            salary_label: Some("₹8-12 LPA + Equity".to_string()),
            experience: Some("2+ years".to_string()),
            funding: Some("Pre-seed".to_string()),
            glassdoor_rating: None,
        },
        JobPosting {
            id: 3,
            title: "Product Designer".to_string(),
            company: "Airbnb".to_string(),
            location: "Gurgaon, India".to_string(),
            salary_min: 3_500_000,
            salary_max: 4_200_000,
            requirements: strings(&[
                "Figma",
                "UI/UX",
                "User Research",
                "Prototyping",
                "Design Systems",
            ]),
            preferred_skills: strings(&["Motion Design", "Accessibility", "Framer"]),
            description: "Craft delightful experiences for millions of travelers. Join a \
                world-class design team with strong mentorship, structured growth paths, and \
                excellent work-life balance. Focus on accessibility and inclusive design."
                .to_string(),
            company_size: CompanySize::Global,
            uses_ats: true,
            employment_type: Some("Full-time".to_string()),
            remote: Some("Hybrid".to_string()),
            salary_label: Some("₹35-42 LPA".to_string()),
            experience: Some("4+ years".to_string()),
            funding: Some("Public".to_string()),
            glassdoor_rating: Some(4.3),
        },
        JobPosting {
            id: 4,
            title: "Backend Engineer".to_string(),
            company: "Razorpay".to_string(),
            location: "Bangalore, India".to_string(),
            salary_min: 3_000_000,
            salary_max: 4_000_000,
            requirements: strings(&["Node.js", "Python", "PostgreSQL", "Redis", "AWS"]),
            preferred_skills: strings(&["Go", "Kubernetes", "Event-Driven Architecture"]),
            description: "Build scalable payment systems handling millions of transactions. \
                Strong focus on mentorship, learning, and career growth. Competitive benefits \
                and structured work environment."
                .to_string(),
            company_size: CompanySize::Enterprise,
            uses_ats: true,
            employment_type: Some("Full-time".to_string()),
            remote: Some("Office".to_string()),
            salary_label: Some("₹30-40 LPA".to_string()),
            experience: Some("3-5 years".to_string()),
            funding: Some("Series E".to_string()),
            glassdoor_rating: Some(4.1),
        },
    ]
}
