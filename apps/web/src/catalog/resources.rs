use crate::models::resource::{Resource, ResourceCategory, ResourceKind};

pub static RESOURCES: &[Resource] = &[
    Resource {
        id: 1,
        title: "AI & Machine Learning Fundamentals",
        description: "Master the basics of artificial intelligence and machine learning with hands-on projects and real-world applications.",
        category: ResourceCategory::Tech,
        kind: ResourceKind::Course,
        level: "Intermediate",
        duration: "8 weeks",
        is_free: false,
    },
    Resource {
        id: 2,
        title: "Women in Tech Leadership",
        description: "Develop leadership skills specifically tailored for women in technology roles and organizations.",
        category: ResourceCategory::Leadership,
        kind: ResourceKind::Course,
        level: "Advanced",
        duration: "6 weeks",
        is_free: true,
    },
    Resource {
        id: 3,
        title: "Startup Funding Strategies",
        description: "Learn how to secure funding for your startup from angel investors and venture capital firms.",
        category: ResourceCategory::Entrepreneurship,
        kind: ResourceKind::Workshop,
        level: "All Levels",
        duration: "4 hours",
        is_free: false,
    },
    Resource {
        id: 4,
        title: "Digital Marketing Mastery",
        description: "Comprehensive guide to digital marketing strategies for modern businesses and entrepreneurs.",
        category: ResourceCategory::Career,
        kind: ResourceKind::Course,
        level: "Beginner",
        duration: "5 weeks",
        is_free: true,
    },
    Resource {
        id: 5,
        title: "Blockchain & Web3 Essentials",
        description: "Understand blockchain technology and explore opportunities in the Web3 ecosystem.",
        category: ResourceCategory::Tech,
        kind: ResourceKind::Course,
        level: "Intermediate",
        duration: "4 weeks",
        is_free: true,
    },
    Resource {
        id: 6,
        title: "Executive Presence & Communication",
        description: "Develop commanding presence and effective communication skills for executive roles.",
        category: ResourceCategory::Leadership,
        kind: ResourceKind::Workshop,
        level: "Advanced",
        duration: "2 days",
        is_free: false,
    },
];
