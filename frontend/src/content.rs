pub struct Service {
    pub name: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        name: "Individual therapy",
        duration: "50 min",
        description: "One-to-one sessions to work through anxiety, grief, burnout or whatever is weighing on you.",
    },
    Service {
        name: "Couples therapy",
        duration: "80 min",
        description: "A calm space for both of you to be heard and to find new ways of talking to each other.",
    },
    Service {
        name: "Reiki",
        duration: "60 min",
        description: "Gentle hands-on energy work to release tension and help the body settle.",
    },
    Service {
        name: "Therapeutic massage",
        duration: "60 min",
        description: "Slow, deep bodywork focused on the neck, back and shoulders.",
    },
    Service {
        name: "Online session",
        duration: "50 min",
        description: "The same care by video call, wherever you are.",
    },
];

pub const PROFESSIONALS: &[&str] = &["Dr. Helena Costa", "Marcos Lima", "Julia Reis"];

pub const PAYMENT_METHODS: &[&str] = &["Card", "Bank transfer", "Cash", "Health plan"];

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const FAQ_ENTRIES: &[FaqEntry] = &[
    FaqEntry {
        question: "How do I book a session?",
        answer: "Pick a service, choose a day and a time, and tap the button. WhatsApp opens with your request already written so you only have to press send.",
    },
    FaqEntry {
        question: "Can I book for today?",
        answer: "Yes, as long as the session starts at least 20 minutes from now. We confirm every request by message.",
    },
    FaqEntry {
        question: "Do you offer online sessions?",
        answer: "Every therapy service is also available by video call. Choose \"Online session\" or mention it in your notes.",
    },
    FaqEntry {
        question: "What if I need to cancel?",
        answer: "Send us a message up to 24 hours before your session and we will find another time with you.",
    },
    FaqEntry {
        question: "Is what I share kept private?",
        answer: "Sessions are confidential. Nothing you tell us is shared without your written consent.",
    },
];

pub fn service_names() -> impl Iterator<Item = &'static str> {
    SERVICES.iter().map(|s| s.name)
}
