use crate::features::education::models::EducationTopic;

/// The education catalog, in display order. Loaded once, never mutated.
pub const EDUCATION_TOPICS: &[EducationTopic] = &[
    EducationTopic {
        id: "woman-safety",
        title: "Woman Safety",
        thumbnail: "https://picsum.photos/seed/woman-safety/400/300",
        short_description: "Essential safety tips and legal rights for women in public and private spaces.",
        full_text: "Ensuring women's safety is a collective responsibility. Key measures include being aware of your surroundings, carrying safety devices, and knowing emergency contact numbers. Legal frameworks like the Protection of Women from Domestic Violence Act, 2005, and laws against sexual harassment at the workplace provide crucial protection. It is vital for women to be informed about their rights and the procedures for reporting crimes.",
    },
    EducationTopic {
        id: "illiteracy",
        title: "Combating Illiteracy",
        thumbnail: "https://picsum.photos/seed/illiteracy/400/300",
        short_description: "Understanding the impact of illiteracy and ways to contribute to adult education programs.",
        full_text: "Illiteracy is a significant barrier to social and economic development. It limits opportunities and perpetuates poverty. Community-driven adult literacy programs, volunteering as a tutor, and donating to educational NGOs are effective ways to combat this issue. The government's National Literacy Mission aims to make citizens functionally literate, empowering them to participate fully in society.",
    },
    EducationTopic {
        id: "education",
        title: "Right to Education",
        thumbnail: "https://picsum.photos/seed/education/400/300",
        short_description: "The Right to Education Act (RTE) ensures free and compulsory education for children.",
        full_text: "The Right of Children to Free and Compulsory Education (RTE) Act, 2009, is a landmark legislation that makes education a fundamental right for every child between the ages of 6 and 14. This act mandates that all private schools reserve 25% of their seats for children from economically weaker sections. Citizens can play a role by ensuring children in their community are enrolled in school and reporting any violations of the RTE Act.",
    },
    EducationTopic {
        id: "corruption",
        title: "Fighting Corruption",
        thumbnail: "https://picsum.photos/seed/corruption/400/300",
        short_description: "How to identify and report corruption using tools like the Right to Information (RTI) Act.",
        full_text: "Corruption undermines democracy and the rule of law. Citizens can fight corruption by refusing to pay bribes and reporting demands for them. The Right to Information (RTI) Act, 2005, is a powerful tool that empowers citizens to seek information from public authorities, promoting transparency and accountability. Filing an RTI application can expose malpractices and ensure public officials perform their duties honestly.",
    },
    EducationTopic {
        id: "pollution",
        title: "Pollution Control",
        thumbnail: "https://picsum.photos/seed/pollution/400/300",
        short_description: "Simple steps to reduce personal carbon footprint and combat environmental pollution.",
        full_text: "Pollution poses a severe threat to public health and the environment. Individual actions, when multiplied, can make a significant difference. Reducing, reusing, and recycling waste, conserving water and electricity, using public transport, and planting trees are effective ways to reduce pollution. Reporting environmental violations to the local Pollution Control Board is also a crucial civic duty.",
    },
    EducationTopic {
        id: "sanitation",
        title: "Basic Sanitation",
        thumbnail: "https://picsum.photos/seed/sanitation/400/300",
        short_description: "The importance of proper sanitation and its role in public health.",
        full_text: "Access to basic sanitation is essential for public health and dignity. Poor sanitation leads to the spread of diseases like cholera, typhoid, and diarrhea. The Swachh Bharat Mission is a nationwide campaign to eliminate open defecation and improve solid waste management. Citizens can contribute by maintaining cleanliness in their surroundings and promoting the use of toilets.",
    },
    EducationTopic {
        id: "healthcare",
        title: "Access to Healthcare",
        thumbnail: "https://picsum.photos/seed/healthcare/400/300",
        short_description: "Understanding your rights to public healthcare services and government schemes.",
        full_text: "Affordable healthcare is a critical need. The government runs various schemes like Ayushman Bharat to provide health insurance to the underprivileged. Citizens should be aware of the public healthcare facilities available in their area, such as Primary Health Centers (PHCs). Understanding your rights as a patient and demanding quality service from public hospitals is essential.",
    },
    EducationTopic {
        id: "traffic",
        title: "Traffic Rules",
        thumbnail: "https://picsum.photos/seed/traffic/400/300",
        short_description: "The significance of adhering to traffic regulations for road safety.",
        full_text: "Following traffic rules is non-negotiable for ensuring road safety for everyone. Simple acts like wearing a helmet, using seatbelts, avoiding speeding, and not using a mobile phone while driving can save lives. Understanding road signs and respecting traffic signals creates a safer and more efficient traffic flow for all road users.",
    },
];
