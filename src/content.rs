/// Static studio copy shown across the pages

pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub struct Point {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub text: &'static str,
}

pub const TAGLINE: &str = "Capturing life's most precious moments with artistic excellence";

pub const STATS: [Stat; 4] = [
    Stat { number: "500+", label: "Events Captured" },
    Stat { number: "10+", label: "Years Experience" },
    Stat { number: "1000+", label: "Happy Clients" },
    Stat { number: "100%", label: "Client Satisfaction" },
];

pub const SERVICES: [Service; 5] = [
    Service {
        icon: "💍",
        title: "Wedding Photography & Videography",
        summary: "Capturing your special day with artistic vision and attention to detail. Every moment, every emotion, beautifully preserved.",
        description: "We document every precious moment from the ceremony to the reception, working discreetly to capture candid moments while orchestrating stunning formal portraits.",
        features: &["Engagement sessions", "Full-day coverage", "Destination weddings", "Highlight films"],
    },
    Service {
        icon: "🎉",
        title: "Event Coverage",
        summary: "Professional documentation of corporate events, festivals, and celebrations. Comprehensive coverage that tells your story.",
        description: "Our team arrives early to scout locations, set up equipment and coordinate with organizers, capturing both the energy of the event and its important moments.",
        features: &["Corporate events", "Festivals", "Conferences", "Product launches"],
    },
    Service {
        icon: "🎬",
        title: "Videography",
        summary: "Cinematic storytelling that brings your memories to life. Motion, emotion, and artistry combined.",
        description: "From highlight reels to full documentaries, we shoot and edit films that carry the feeling of the day.",
        features: &["Cinematic highlights", "Full-length edits", "Drone footage", "Same-day edits"],
    },
    Service {
        icon: "📸",
        title: "Portrait Sessions",
        summary: "Elegant and timeless portraits for individuals, families, and couples. Professional studio and location photography.",
        description: "Relaxed sessions with natural and studio lighting, for headshots, family portraits and creative personal work.",
        features: &["Headshots", "Family portraits", "Couples", "Studio or location"],
    },
    Service {
        icon: "🏢",
        title: "Commercial Photography",
        summary: "High-quality commercial photography for businesses, products, and marketing campaigns.",
        description: "E-commerce, brand campaigns, architecture and food photography that helps brands tell their story.",
        features: &["Product photography", "Brand campaigns", "Architecture", "Food"],
    },
];

pub const WHY_CHOOSE_US: [Point; 4] = [
    Point {
        icon: "🎨",
        title: "Artistic Excellence",
        description: "Every frame is crafted with artistic vision, so your memories are not just documented but transformed into works of art.",
    },
    Point {
        icon: "👥",
        title: "Professional Team",
        description: "Experienced photographers and videographers bring years of expertise to every project.",
    },
    Point {
        icon: "📷",
        title: "Cutting-Edge Technology",
        description: "The latest professional equipment and editing software for stunning, high-quality results.",
    },
    Point {
        icon: "✨",
        title: "Personalized Service",
        description: "Every client is unique; we tailor our approach to your style, preferences and vision.",
    },
];

pub const VALUES: [Point; 3] = [
    Point {
        icon: "💎",
        title: "Excellence",
        description: "We strive for perfection in every frame and never compromise on the quality of our deliverables.",
    },
    Point {
        icon: "🔥",
        title: "Passion",
        description: "Our love for photography and videography drives us to keep innovating and pushing creative boundaries.",
    },
    Point {
        icon: "⭐",
        title: "Authenticity",
        description: "Real moments, real emotions, real stories: visual stories that reflect the true essence of your event.",
    },
];

pub const EVENT_TYPES: [Point; 4] = [
    Point {
        icon: "🏢",
        title: "Corporate Events",
        description: "Corporate gatherings, annual meetings and business functions, from the formal proceedings to the networking moments.",
    },
    Point {
        icon: "🎪",
        title: "Festivals & Celebrations",
        description: "The energy of festivals, cultural celebrations and community events.",
    },
    Point {
        icon: "🎤",
        title: "Conferences & Seminars",
        description: "Keynotes, panel discussions and networking sessions preserved for future reference.",
    },
    Point {
        icon: "🚀",
        title: "Product Launches",
        description: "The unveiling, the demonstrations and the audience reactions, ready for marketing.",
    },
];

pub const PROCESS: [Point; 4] = [
    Point {
        icon: "1",
        title: "Consultation",
        description: "A detailed conversation about your event, its objectives and your requirements, leading to a coverage plan.",
    },
    Point {
        icon: "2",
        title: "Pre-Event Planning",
        description: "We visit the venue, coordinate with organizers and plan camera placements.",
    },
    Point {
        icon: "3",
        title: "Event Coverage",
        description: "Our team arrives early, sets up, and captures every important moment.",
    },
    Point {
        icon: "4",
        title: "Post-Production & Delivery",
        description: "Careful editing and curation, delivered as high-resolution images, edited films and an online gallery.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah & Michael",
        role: "Wedding Clients",
        text: "Maelstrom Frames captured our wedding day perfectly. Every moment was beautifully documented, and the final photos exceeded our expectations.",
    },
    Testimonial {
        name: "TechCorp Inc.",
        role: "Corporate Client",
        text: "Professional, punctual, and incredibly talented. The team documented our product launch flawlessly.",
    },
    Testimonial {
        name: "Jennifer & David",
        role: "Wedding Clients",
        text: "Working with Maelstrom Frames was an absolute pleasure. They made us feel comfortable throughout the day and delivered stunning results.",
    },
];

pub const STORY: [&str; 3] = [
    "Maelstrom Frames began with a simple belief: the moments that matter most deserve to be remembered beautifully.",
    "Specializing in wedding and event photography with over 8 years of experience, our team has documented celebrations across five continents.",
    "We blend documentary instinct with an editorial eye, so every gallery tells the complete story of your day.",
];
