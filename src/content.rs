//! Copy shown on the home page.

pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Snap sections in scroll order. Each one is a full viewport tall.
pub const SECTIONS: &[Section] = &[
    Section { id: "hero", label: "Welcome" },
    Section { id: "mission", label: "Our Mission" },
    Section { id: "journey-intro", label: "The Journey" },
    Section { id: "journey", label: "Three Steps" },
    Section { id: "services", label: "Services" },
    Section { id: "industries", label: "Industries" },
    Section { id: "success-stories", label: "Success Stories" },
    Section { id: "partnership", label: "Partner Up" },
    Section { id: "pricing", label: "Pricing" },
    Section { id: "contact", label: "Contact" },
];

pub fn section_labels() -> Vec<String> {
    SECTIONS.iter().map(|s| s.label.to_string()).collect()
}

pub struct JourneyStep {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const JOURNEY_STEPS: &[JourneyStep] = &[
    JourneyStep {
        number: "01",
        title: "Identify",
        description: "We help you identify high-impact AI opportunities and build a step-by-step AI Transformation strategy to bring them to life.",
    },
    JourneyStep {
        number: "02",
        title: "Educate",
        description: "We train and support your team with the right tools and know-how to embed AI across your entire organization.",
    },
    JourneyStep {
        number: "03",
        title: "Develop",
        description: "We leverage our extensive experience and network to develop custom AI systems that are proven to move the needle inside your business.",
    },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "AI Strategy & Roadmapping",
        description: "Develop comprehensive AI strategies aligned with your business goals and actionable roadmaps for adoption.",
        features: &["Strategic Assessment", "Technology Roadmap", "ROI Planning", "Change Management"],
    },
    Service {
        title: "Custom AI Solution Development",
        description: "Build bespoke AI solutions tailored to your needs, from machine learning models to intelligent automation.",
        features: &["Machine Learning Models", "Computer Vision", "Natural Language Processing", "Predictive Analytics"],
    },
    Service {
        title: "Generative AI Integration",
        description: "Harness generative AI to transform content creation, customer service, and business processes.",
        features: &["ChatGPT Integration", "Content Generation", "AI Assistants", "Workflow Automation"],
    },
    Service {
        title: "LLM Fine-Tuning & Deployment",
        description: "Customize large language models for your domain and deploy them securely in your environment.",
        features: &["Model Fine-Tuning", "Domain Adaptation", "Secure Deployment", "Performance Optimization"],
    },
    Service {
        title: "Data Strategy & Engineering",
        description: "Build robust data foundations that enable AI success, from data architecture to MLOps pipelines.",
        features: &["Data Architecture", "ETL Pipelines", "MLOps Setup", "Data Governance"],
    },
    Service {
        title: "AI Ethics & Risk Advisory",
        description: "Deploy AI responsibly with ethics frameworks, bias detection, and risk management.",
        features: &["Ethics Framework", "Bias Detection", "Risk Assessment", "Compliance Support"],
    },
];

pub struct Industry {
    pub title: &'static str,
    pub description: &'static str,
    pub stat: &'static str,
}

pub const INDUSTRIES: &[Industry] = &[
    Industry {
        title: "Finance",
        description: "Risk assessment, fraud detection, algorithmic trading, and regulatory compliance solutions.",
        stat: "40% reduction in fraud detection time",
    },
    Industry {
        title: "Healthcare",
        description: "Medical imaging analysis, drug discovery, patient care optimization, and diagnostic assistance.",
        stat: "85% improvement in diagnostic accuracy",
    },
    Industry {
        title: "Retail",
        description: "Personalized recommendations, inventory optimization, demand forecasting, and customer analytics.",
        stat: "25% increase in conversion rates",
    },
    Industry {
        title: "Education",
        description: "Personalized learning, automated grading, content generation, and student performance analytics.",
        stat: "60% improvement in learning outcomes",
    },
    Industry {
        title: "Logistics",
        description: "Route optimization, predictive maintenance, supply chain analytics, and warehouse automation.",
        stat: "30% reduction in operational costs",
    },
    Industry {
        title: "Manufacturing",
        description: "Quality control, predictive maintenance, production optimization, and smart factory solutions.",
        stat: "45% decrease in downtime",
    },
];

pub struct CaseResult {
    pub metric: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

pub struct CaseStudy {
    pub company: &'static str,
    pub industry: &'static str,
    pub challenge: &'static str,
    pub results: &'static [CaseResult],
    pub testimonial: &'static str,
    pub author: &'static str,
}

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        company: "GlobalFinance Corp",
        industry: "Financial Services",
        challenge: "Reduce fraudulent transactions while maintaining customer experience",
        results: &[
            CaseResult { metric: "Fraud Detection", value: "95%", note: "accuracy" },
            CaseResult { metric: "False Positives", value: "60%", note: "reduction" },
            CaseResult { metric: "Processing Time", value: "300ms", note: "average response" },
        ],
        testimonial: "Zenik AI's solution transformed our fraud detection capabilities. We're now catching 95% of fraudulent transactions while significantly improving customer experience.",
        author: "David Park, CTO",
    },
    CaseStudy {
        company: "MediCare Plus",
        industry: "Healthcare",
        challenge: "Improve diagnostic accuracy for medical imaging analysis",
        results: &[
            CaseResult { metric: "Diagnostic Accuracy", value: "92%", note: "improvement" },
            CaseResult { metric: "Analysis Time", value: "80%", note: "faster" },
            CaseResult { metric: "Radiologist Efficiency", value: "150%", note: "increase" },
        ],
        testimonial: "The AI diagnostic assistant has revolutionized our radiology department. We're delivering faster, more accurate diagnoses while supporting our medical staff.",
        author: "Dr. Sarah Williams, Chief Medical Officer",
    },
    CaseStudy {
        company: "RetailMax",
        industry: "E-commerce",
        challenge: "Increase online sales through personalized customer experiences",
        results: &[
            CaseResult { metric: "Conversion Rate", value: "35%", note: "increase" },
            CaseResult { metric: "Average Order Value", value: "28%", note: "boost" },
            CaseResult { metric: "Customer Engagement", value: "65%", note: "higher" },
        ],
        testimonial: "Our partnership with Zenik AI has been transformative. The personalization engine has become the backbone of our customer experience strategy.",
        author: "Michael Chen, VP of Digital Strategy",
    },
];

pub struct Plan {
    pub name: &'static str,
    pub description: &'static str,
    /// `None` for custom pricing.
    pub monthly_price: Option<&'static str>,
    pub features: &'static [&'static str],
    pub button_text: &'static str,
    pub popular: bool,
    pub primary: bool,
}

impl Plan {
    pub fn price_label(&self) -> String {
        match self.monthly_price {
            Some(price) => format!("${}", price),
            None => "Custom".to_string(),
        }
    }
}

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Business Partner",
        description: "Dedicated support for growing businesses",
        monthly_price: Some("10,000"),
        features: &[
            "Dedicated AI Engineer",
            "VIP support queue",
            "Documentation and user guides",
            "Live debugging and solution management",
            "Client portal",
        ],
        button_text: "Get Started",
        popular: false,
        primary: false,
    },
    Plan {
        name: "Professional",
        description: "Advanced features for scaling teams",
        monthly_price: Some("25,000"),
        features: &[
            "Everything in Business Partner",
            "Priority technical support",
            "Custom integrations",
            "Advanced analytics dashboard",
            "Monthly strategy sessions",
        ],
        button_text: "Choose Professional",
        popular: true,
        primary: true,
    },
    Plan {
        name: "Enterprise Partner",
        description: "Complete enterprise solution",
        monthly_price: None,
        features: &[
            "Includes all Business Partner features, plus:",
            "Dedicated Project Manager",
            "Weekly 60 minute meetings with our executive team",
            "Strategic roadmap review",
            "Team training and enablement sessions",
            "Quarterly executive briefing",
        ],
        button_text: "Contact Sales",
        popular: false,
        primary: true,
    },
];

pub struct ContactInfo {
    pub title: &'static str,
    pub content: &'static str,
    pub link: &'static str,
}

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        title: "Office Location",
        content: "123 Innovation Drive, San Francisco, CA 94105",
        link: "https://maps.google.com",
    },
    ContactInfo { title: "Phone", content: "+1 (555) 123-4567", link: "tel:+15551234567" },
    ContactInfo { title: "Email", content: "hello@zenik.ai", link: "mailto:hello@zenik.ai" },
    ContactInfo {
        title: "Book a Meeting",
        content: "Schedule a consultation",
        link: "https://calendly.com/zenik-ai",
    },
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("LinkedIn", "https://linkedin.com/company/zenik-ai"),
    ("Twitter", "https://twitter.com/zenik_ai"),
    ("GitHub", "https://github.com/zenik-ai"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_unique() {
        let mut ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
    }

    #[test]
    fn exactly_one_popular_plan() {
        assert_eq!(PLANS.iter().filter(|p| p.popular).count(), 1);
    }

    #[test]
    fn custom_plan_has_no_dollar_sign() {
        assert_eq!(PLANS[2].price_label(), "Custom");
        assert_eq!(PLANS[0].price_label(), "$10,000");
    }
}
