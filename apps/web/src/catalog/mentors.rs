use crate::models::mentor::{AvatarStyle, MentorProfile};

pub static MENTORS: &[MentorProfile] = &[
    MentorProfile {
        id: 1,
        name: "Dr. Sarah Johnson",
        role: "CTO at TechForHer",
        expertise: "AI & Leadership",
        bio: "15+ years leading tech teams, specializing in AI product development and women in tech leadership.",
        avatar: AvatarStyle::Purple,
    },
    MentorProfile {
        id: 2,
        name: "Maria Rodriguez",
        role: "Serial Entrepreneur",
        expertise: "Startups & VC",
        bio: "Founder of 3 successful tech startups, raised $50M+ in funding. Passionate about women founders.",
        avatar: AvatarStyle::Pink,
    },
    MentorProfile {
        id: 3,
        name: "Dr. Amina Khan",
        role: "Healthcare Innovation Lead",
        expertise: "HealthTech",
        bio: "Leading digital health transformation with 20+ years in healthcare technology and policy.",
        avatar: AvatarStyle::Blue,
    },
    MentorProfile {
        id: 4,
        name: "Lisa Chen",
        role: "Investment Partner",
        expertise: "Finance & Strategy",
        bio: "Venture capital investor focusing on women-led startups. Former Fortune 500 strategist.",
        avatar: AvatarStyle::Green,
    },
    MentorProfile {
        id: 5,
        name: "Nadia Williams",
        role: "Head of Product Design",
        expertise: "Design Systems",
        bio: "Building inclusive design systems at scale. Mentor for women in design and tech.",
        avatar: AvatarStyle::Purple,
    },
    MentorProfile {
        id: 6,
        name: "Dr. Chloe Smith",
        role: "Data Science Director",
        expertise: "ML & Analytics",
        bio: "Leading data science teams and building AI products. Advocate for women in STEM education.",
        avatar: AvatarStyle::Pink,
    },
];
