use crate::features::reports::models::ReportCategory;
use crate::features::solutions::models::Solution;

/// The solutions catalog, in display order. Loaded once, never mutated.
pub const SOLUTIONS: &[Solution] = &[
    Solution {
        id: "s1",
        category: ReportCategory::GarbageManagement,
        title: "Garbage Overflow",
        thumbnail: "https://picsum.photos/seed/garbage/400/300",
        steps: &[
            "Document the issue with clear photos and note the exact location.",
            "Contact your local municipality or sanitation department via their official helpline or app.",
            "Provide them with the details and get a complaint reference ID.",
            "Follow up regularly using the reference ID until the issue is resolved.",
        ],
    },
    Solution {
        id: "s2",
        category: ReportCategory::Potholes,
        title: "Fixing Potholes",
        thumbnail: "https://picsum.photos/seed/potholes/400/300",
        steps: &[
            "Report the pothole on the official civic body website or app. Many cities have dedicated portals for road maintenance.",
            "Use social media to tag the official accounts of the municipal corporation and local representatives.",
            "Form a resident group to collectively submit a formal complaint to the local ward office.",
        ],
    },
    Solution {
        id: "s3",
        category: ReportCategory::StreetlampIssue,
        title: "Non-Functional Streetlamp",
        thumbnail: "https://picsum.photos/seed/streetlamp/400/300",
        steps: &[
            "Note the pole number, which is usually painted on the lamp post.",
            "Call the electricity board or the municipal department responsible for street lighting.",
            "File a complaint with the pole number and location details.",
            "If the issue persists, escalate it to a higher authority within the department.",
        ],
    },
    Solution {
        id: "s4",
        category: ReportCategory::WaterLogging,
        title: "Dealing with Water Logging",
        thumbnail: "https://picsum.photos/seed/waterlogging/400/300",
        steps: &[
            "Immediately report the water logging to the local civic body's disaster management or monsoon helpline.",
            "Check for and clear any small blockages in nearby drains if it is safe to do so.",
            "Avoid wading through stagnant water to prevent water-borne diseases.",
            "Advocate for regular pre-monsoon cleaning of drains in your area through your residents' association.",
        ],
    },
    Solution {
        id: "s5",
        category: ReportCategory::OpenDrainage,
        title: "Uncovered or Open Drains",
        thumbnail: "https://picsum.photos/seed/drainage/400/300",
        steps: &[
            "This is a major safety hazard. Report it immediately to the municipal corporation.",
            "Take photos and share them on public forums and social media to draw attention.",
            "Submit a written complaint to the local ward office, highlighting the danger to pedestrians, especially children and the elderly.",
        ],
    },
];
