use crate::models::stat::SiteStat;

pub static STATS: &[SiteStat] = &[
    SiteStat {
        key: "members",
        label: "Women Empowered",
        target: 50_000,
    },
    SiteStat {
        key: "mentors",
        label: "Expert Mentors",
        target: 1_200,
    },
    SiteStat {
        key: "resources",
        label: "Learning Resources",
        target: 350,
    },
    SiteStat {
        key: "placements",
        label: "Job Placements",
        target: 8_500,
    },
];
