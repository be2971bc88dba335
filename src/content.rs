//! Static site content. Everything here is copy, not behavior.

use crate::models::{
    Article, Brand, NavLink, Office, OfficeAddress, Program, Service, SiteMeta, Stat, Testimonial,
    Workshop,
};

pub fn meta() -> SiteMeta {
    SiteMeta {
        brand: Brand {
            name: "NOVA VISTA EDUCATION",
            tagline: "Empowering Growth. Elevating Futures.",
            primary_cta: "Apply Now",
            secondary_cta: "View Programs",
        },
        stats: vec![
            Stat { label: "Students Enrolled", value: "1,200+" },
            Stat { label: "Global Recognition", value: "Top Tier" },
            Stat { label: "Courses Offered", value: "45+" },
        ],
        offices: vec![
            Office { city: "London", region: "UK" },
            Office { city: "New York", region: "USA" },
            Office { city: "Singapore", region: "APAC" },
        ],
    }
}

pub fn programs() -> Vec<Program> {
    vec![
        Program {
            title: "Academic Recognition",
            description: "A pathway for individuals whose work, achievements, and contributions deserve formal acknowledgment through postgraduate honorary titles.",
            features: vec![
                "Honorary Doctorate Titles",
                "Postgraduate Recognition",
                "Global Accreditation Standards",
            ],
        },
        Program {
            title: "Skill & Personality Development",
            description: "Structured training designed to strengthen communication, presence, grooming, and overall confidence for professional environments.",
            features: vec![
                "Public Speaking Mastery",
                "Corporate Grooming",
                "Executive Presence",
            ],
        },
    ]
}

pub fn articles() -> Vec<Article> {
    vec![
        Article {
            id: "1",
            title: "The Future of Academic Recognition",
            excerpt: "How honorary titles are reshaping the landscape of professional acknowledgment.",
            author: "Dr. Sarah Jensen",
            category: "Education",
            published_at: "2024-05-15",
        },
        Article {
            id: "2",
            title: "Mastering Executive Presence",
            excerpt: "Key strategies to enhance your influence in high-stakes corporate environments.",
            author: "Mark Rutherford",
            category: "Skill Development",
            published_at: "2024-04-22",
        },
        Article {
            id: "3",
            title: "Global Accreditation Trends",
            excerpt: "Understanding the shift towards skills-based validation in the modern economy.",
            author: "Elena Rossi",
            category: "Insights",
            published_at: "2024-03-10",
        },
    ]
}

pub fn nav_links() -> Vec<NavLink> {
    vec![
        NavLink { label: "Home", href: "/" },
        NavLink { label: "About Nova Vista Education", href: "/#about" },
        NavLink { label: "Our Vision", href: "/#vision" },
        NavLink { label: "Online Admission", href: "/#admission" },
        NavLink { label: "Our Services", href: "/#services" },
        NavLink { label: "Workshops", href: "/#workshops" },
        NavLink { label: "Testimonials", href: "/#testimonials" },
        NavLink { label: "Leadership", href: "/#leadership" },
        NavLink { label: "Contact Us", href: "/#contact" },
        NavLink { label: "Our Offices", href: "/#offices" },
    ]
}

pub fn services() -> Vec<Service> {
    vec![
        Service {
            title: "Join Ventures, Collaboration & Tieups",
            description: "Building strategic partnerships and collaborations with educational institutions worldwide.",
        },
        Service {
            title: "Establishment of School, Colleges & Universities & Off-Shore Campuses",
            description: "Supporting the establishment and development of educational institutions globally.",
        },
        Service {
            title: "Training and Development Programs for faculty & corporate",
            description: "Comprehensive training programs designed for educators and corporate professionals.",
        },
        Service {
            title: "Counselings and Recruitment of Student from Abroad",
            description: "Expert guidance and support for international student recruitment and counseling.",
        },
        Service {
            title: "Twinning, Exchange and dual certification program",
            description: "Facilitating international exchange programs and dual certification opportunities.",
        },
        Service {
            title: "Admissions for MBBS for the Medical Colleges of Bangladesh & Russia",
            description: "Specialized admission services for medical programs in Bangladesh and Russia.",
        },
    ]
}

pub fn workshops() -> Vec<Workshop> {
    vec![
        Workshop {
            title: "Personality Development for employability",
            duration: "2 Days Workshop (Both Online & Offline)",
            topics: vec![
                "Presentation Skills",
                "Communication Skills",
                "Interpersonal Skills",
                "Work Place Etiquette",
                "Body Language",
                "Self Confidence",
                "Time management",
                "Stress Management",
            ],
        },
        Workshop {
            title: "Export Import & Documentation Workshop",
            duration: "2 Days Workshop",
            topics: vec![
                "Important Steps for Starters",
                "Role of Government Agencies",
                "Export Marketing",
                "Export-Import Documentation",
                "Payment Terms/Incoterms",
                "Methods of Financing",
            ],
        },
        Workshop {
            title: "Money Laundering & Act",
            duration: "2 Days Workshop",
            topics: vec![
                "Concept of money laundering & how it works",
                "Stages and various forms of money laundering",
                "Role of government agencies",
                "Money laundering act",
                "Case studies",
            ],
        },
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            quote: "We strongly recommend Training from Prof Dr Gandhi. If you're reading this and are currently back and forth on signing up for classes - just do it! You'll be glad you did.",
            author: "Super International Exporters",
            position: "Delhi",
        },
        Testimonial {
            quote: "We have used the Institute's training, where we have booked and attended courses run by them, which have all been very well received by the individuals that have attended.",
            author: "Sam Anthony",
            position: "CEO, Allied Overseas, Mumbai",
        },
        Testimonial {
            quote: "Presentation Skill and Subject knowledge are excellent. willingness to solve our problems deserve a lot of appreciation.",
            author: "Paramjeet Singh",
            position: "Delhi",
        },
        Testimonial {
            quote: "I cannot say enough nice things about Prof Gandhi. He is personable, professional and extremely knowledgeable",
            author: "Salah Bin Zaal",
            position: "Dubai",
        },
    ]
}

pub fn office_addresses() -> Vec<OfficeAddress> {
    vec![
        OfficeAddress { country: "India", address: "B37, Lajpat Nagar-2, New Delhi, 110024" },
        OfficeAddress { country: "Germany", address: "Truderinger Strasse 206 Munich, 81825" },
        OfficeAddress { country: "USA", address: "3314 Windridge Ave, Thousand Oaks, CA, 91362" },
        OfficeAddress {
            country: "Bangladesh",
            address: "Shimanto Square Market, Shope no. 262, 2nd Floor, Dhanmondi, Dhaka.",
        },
        OfficeAddress { country: "Qatar", address: "Jabir Ibn Hayyan Street, Abu Dhabi, 110786" },
        OfficeAddress { country: "Nepal", address: "Baluwatar 4 Kathmandu Nepal – 44616" },
    ]
}
