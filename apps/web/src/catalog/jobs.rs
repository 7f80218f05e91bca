use crate::models::job::{ExperienceTier, JobPosting};

pub static JOBS: &[JobPosting] = &[
    JobPosting {
        id: 1,
        title: "Senior Frontend Engineer",
        company: "TechForHer",
        location: "Remote",
        employment_type: "Full-time",
        industry: "Technology",
        experience: ExperienceTier::Senior,
        description: "Lead frontend development for our women empowerment platform using modern React and TypeScript.",
        salary: "$120,000 - $150,000",
        posted: "2 days ago",
    },
    JobPosting {
        id: 2,
        title: "Product Marketing Manager",
        company: "WomenLead Inc.",
        location: "New York, NY",
        employment_type: "Full-time",
        industry: "Marketing",
        experience: ExperienceTier::Mid,
        description: "Drive product marketing strategies for our SaaS platform serving women entrepreneurs.",
        salary: "$90,000 - $120,000",
        posted: "1 week ago",
    },
    JobPosting {
        id: 3,
        title: "UX/UI Designer",
        company: "DesignHer",
        location: "San Francisco, CA",
        employment_type: "Full-time",
        industry: "Design",
        experience: ExperienceTier::Mid,
        description: "Create beautiful and accessible user experiences for our design system and product suite.",
        salary: "$85,000 - $110,000",
        posted: "3 days ago",
    },
    JobPosting {
        id: 4,
        title: "Data Scientist",
        company: "SheStats",
        location: "Remote",
        employment_type: "Part-time",
        industry: "Technology",
        experience: ExperienceTier::Senior,
        description: "Analyze data to uncover insights about women's economic participation and career progression.",
        salary: "$80,000 - $100,000",
        posted: "5 days ago",
    },
    JobPosting {
        id: 5,
        title: "Community Manager",
        company: "EmpowerHer Network",
        location: "Remote",
        employment_type: "Full-time",
        industry: "Community",
        experience: ExperienceTier::Entry,
        description: "Build and engage our global community of women professionals and mentors.",
        salary: "$60,000 - $75,000",
        posted: "1 day ago",
    },
    JobPosting {
        id: 6,
        title: "DevOps Engineer",
        company: "WomenInTech Cloud",
        location: "Austin, TX",
        employment_type: "Full-time",
        industry: "Technology",
        experience: ExperienceTier::Mid,
        description: "Manage cloud infrastructure and CI/CD pipelines for our scalable platform.",
        salary: "$100,000 - $130,000",
        posted: "4 days ago",
    },
];
