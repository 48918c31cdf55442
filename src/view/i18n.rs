// src/view/i18n.rs
//! Interface labels for the supported languages. Backend text and error
//! messages are shown as received and are not translated.

use crate::types::Platform;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    #[default]
    En,
    Hi,
    Bn,
}

impl Lang {
    pub const ALL: [Lang; 3] = [Lang::En, Lang::Hi, Lang::Bn];

    /// Unknown or missing codes fall back to English
    pub fn from_code(code: Option<&str>) -> Self {
        match code.map(|c| c.trim().to_lowercase()).as_deref() {
            Some("hi") | Some("hindi") => Lang::Hi,
            Some("bn") | Some("bengali") | Some("bangla") => Lang::Bn,
            _ => Lang::En,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Hi => "hi",
            Lang::Bn => "bn",
        }
    }

    /// Name of the language in that language, for the switcher
    pub fn native_name(&self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Hi => "हिन्दी",
            Lang::Bn => "বাংলা",
        }
    }

    pub fn labels(&self) -> &'static Labels {
        match self {
            Lang::En => &EN,
            Lang::Hi => &HI,
            Lang::Bn => &BN,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Lang {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Lang::ALL
            .into_iter()
            .find(|lang| lang.code() == s.trim().to_lowercase())
            .ok_or_else(|| anyhow::anyhow!("Unsupported language: {} (use en, hi or bn)", s))
    }
}

pub struct Labels {
    pub title: &'static str,
    pub tagline: &'static str,
    pub job_detection: &'static str,
    pub company_search: &'static str,
    pub platform_integrations: &'static str,
    pub job_analysis: &'static str,
    pub analysis_desc: &'static str,
    pub direct_text: &'static str,
    pub url_extraction: &'static str,
    pub paste_placeholder: &'static str,
    pub analyze_btn: &'static str,
    pub url_placeholder: &'static str,
    pub extract_btn: &'static str,
    pub sample_btn: &'static str,
    pub company_database: &'static str,
    pub company_desc: &'static str,
    pub company_placeholder: &'static str,
    pub search_btn: &'static str,
    pub disclaimer: &'static str,
    pub analyzing: &'static str,
    pub confidence: &'static str,
    pub words_analyzed: &'static str,
    pub suspicious_patterns: &'static str,
    pub extracted_preview: &'static str,
    pub fraud_detected: &'static str,
    pub legitimate_company: &'static str,
    pub fraud_score: &'static str,
    pub reports: &'static str,
    pub last_updated: &'static str,
    pub domain_age: &'static str,
    pub social_media: &'static str,
    pub contact_verification: &'static str,
    pub industry: &'static str,
    pub location: &'static str,
    pub website: &'static str,
    pub red_flags: &'static str,
    pub green_flags: &'static str,
    pub export_pdf: &'static str,
    pub salary_analysis: &'static str,
    pub job_quality: &'static str,
    pub interview_analysis: &'static str,
    pub linkedin_integration: &'static str,
    pub indeed_integration: &'static str,
    pub glassdoor_integration: &'static str,
}

impl Labels {
    pub fn integration(&self, platform: Platform) -> &'static str {
        match platform {
            Platform::LinkedIn => self.linkedin_integration,
            Platform::Indeed => self.indeed_integration,
            Platform::Glassdoor => self.glassdoor_integration,
        }
    }
}

static EN: Labels = Labels {
    title: "JobGuardian Pro - Advanced Job Fraud Detection",
    tagline: "Advanced AI-Powered Job Fraud Detection & Company Verification",
    job_detection: "Job Detection",
    company_search: "Company Search",
    platform_integrations: "Platform Integrations",
    job_analysis: "Job Posting Analysis",
    analysis_desc: "Analyze job postings for potential fraud using advanced AI and pattern recognition.",
    direct_text: "Direct Text",
    url_extraction: "URL Extraction",
    paste_placeholder: "Paste the job posting text here...",
    analyze_btn: "Analyze Job Posting",
    url_placeholder: "Enter job posting URL...",
    extract_btn: "Extract & Analyze",
    sample_btn: "Load Sample",
    company_database: "Company Fraud Database",
    company_desc: "Search our comprehensive database to check if a company has been reported for fraud.",
    company_placeholder: "Enter company name...",
    search_btn: "Search",
    disclaimer: "⚠️ This tool is for educational purposes. Always verify job postings through official channels.",
    analyzing: "Analyzing...",
    confidence: "Confidence",
    words_analyzed: "Words Analyzed",
    suspicious_patterns: "Suspicious Patterns Detected",
    extracted_preview: "Extracted Text Preview",
    fraud_detected: "FRAUD DETECTED",
    legitimate_company: "LEGITIMATE COMPANY",
    fraud_score: "Fraud Score",
    reports: "Reports",
    last_updated: "Last Updated",
    domain_age: "Domain Age",
    social_media: "Social Media",
    contact_verification: "Contact Verification",
    industry: "Industry",
    location: "Location",
    website: "Website",
    red_flags: "Red Flags",
    green_flags: "Green Flags",
    export_pdf: "Export PDF Report",
    salary_analysis: "Salary Analysis",
    job_quality: "Job Description Quality",
    interview_analysis: "Interview Process Analysis",
    linkedin_integration: "LinkedIn Integration",
    indeed_integration: "Indeed Integration",
    glassdoor_integration: "Glassdoor Integration",
};

static HI: Labels = Labels {
    title: "जॉबगार्डियन प्रो - उन्नत नौकरी धोखाधड़ी पहचान",
    tagline: "उन्नत AI-संचालित नौकरी धोखाधड़ी पहचान और कंपनी सत्यापन",
    job_detection: "नौकरी पहचान",
    company_search: "कंपनी खोज",
    platform_integrations: "प्लेटफ़ॉर्म एकीकरण",
    job_analysis: "नौकरी पोस्टिंग विश्लेषण",
    analysis_desc: "उन्नत AI और पैटर्न पहचान का उपयोग करके नौकरी पोस्टिंग का विश्लेषण करें।",
    direct_text: "सीधा टेक्स्ट",
    url_extraction: "URL निष्कर्षण",
    paste_placeholder: "नौकरी पोस्टिंग टेक्स्ट यहाँ पेस्ट करें...",
    analyze_btn: "नौकरी पोस्टिंग विश्लेषण करें",
    url_placeholder: "नौकरी पोस्टिंग URL दर्ज करें...",
    extract_btn: "निष्कर्षण और विश्लेषण",
    sample_btn: "नमूना लोड करें",
    company_database: "कंपनी धोखाधड़ी डेटाबेस",
    company_desc: "जांचें कि क्या कंपनी को धोखाधड़ी के लिए रिपोर्ट किया गया है।",
    company_placeholder: "कंपनी का नाम दर्ज करें...",
    search_btn: "खोजें",
    disclaimer: "⚠️ यह उपकरण शैक्षिक उद्देश्यों के लिए है। हमेशा आधिकारिक चैनलों के माध्यम से नौकरी पोस्टिंग की जांच करें।",
    analyzing: "विश्लेषण कर रहा है...",
    confidence: "विश्वास",
    words_analyzed: "विश्लेषित शब्द",
    suspicious_patterns: "संदिग्ध पैटर्न पाए गए",
    extracted_preview: "निकाले गए टेक्स्ट का पूर्वावलोकन",
    fraud_detected: "धोखाधड़ी पाई गई",
    legitimate_company: "वैध कंपनी",
    fraud_score: "धोखाधड़ी स्कोर",
    reports: "रिपोर्ट",
    last_updated: "अंतिम अपडेट",
    domain_age: "डोमेन आयु",
    social_media: "सोशल मीडिया",
    contact_verification: "संपर्क सत्यापन",
    industry: "उद्योग",
    location: "स्थान",
    website: "वेबसाइट",
    red_flags: "लाल झंडे",
    green_flags: "हरे झंडे",
    export_pdf: "PDF रिपोर्ट निर्यात करें",
    salary_analysis: "वेतन विश्लेषण",
    job_quality: "नौकरी विवरण गुणवत्ता",
    interview_analysis: "साक्षात्कार प्रक्रिया विश्लेषण",
    linkedin_integration: "LinkedIn एकीकरण",
    indeed_integration: "Indeed एकीकरण",
    glassdoor_integration: "Glassdoor एकीकरण",
};

static BN: Labels = Labels {
    title: "জবগার্ডিয়ান প্রো - উন্নত চাকরি প্রতারণা সনাক্তকরণ",
    tagline: "উন্নত AI-চালিত চাকরি প্রতারণা সনাক্তকরণ এবং কোম্পানি যাচাইকরণ",
    job_detection: "চাকরি সনাক্তকরণ",
    company_search: "কোম্পানি অনুসন্ধান",
    platform_integrations: "প্ল্যাটফর্ম ইন্টিগ্রেশন",
    job_analysis: "চাকরি পোস্টিং বিশ্লেষণ",
    analysis_desc: "উন্নত AI এবং প্যাটার্ন সনাক্তকরণ ব্যবহার করে চাকরি পোস্টিং বিশ্লেষণ করুন।",
    direct_text: "সরাসরি টেক্সট",
    url_extraction: "URL নিষ্কর্ষণ",
    paste_placeholder: "চাকরি পোস্টিং টেক্সট এখানে পেস্ট করুন...",
    analyze_btn: "চাকরি পোস্টিং বিশ্লেষণ করুন",
    url_placeholder: "চাকরি পোস্টিং URL লিখুন...",
    extract_btn: "নিষ্কর্ষণ এবং বিশ্লেষণ",
    sample_btn: "নমুনা লোড করুন",
    company_database: "কোম্পানি প্রতারণা ডেটাবেস",
    company_desc: "কোম্পানিকে প্রতারণার জন্য রিপোর্ট করা হয়েছে কিনা তা যাচাই করুন।",
    company_placeholder: "কোম্পানির নাম লিখুন...",
    search_btn: "অনুসন্ধান করুন",
    disclaimer: "⚠️ এই টুলটি শিক্ষামূলক উদ্দেশ্যে। সর্বদা সরকারি চ্যানেলের মাধ্যমে চাকরি পোস্টিং যাচাই করুন।",
    analyzing: "বিশ্লেষণ করছে...",
    confidence: "আত্মবিশ্বাস",
    words_analyzed: "বিশ্লেষিত শব্দ",
    suspicious_patterns: "সন্দেহজনক প্যাটার্ন পাওয়া গেছে",
    extracted_preview: "নিষ্কাশিত টেক্সটের পূর্বরূপ",
    fraud_detected: "প্রতারণা সনাক্ত হয়েছে",
    legitimate_company: "বৈধ কোম্পানি",
    fraud_score: "প্রতারণা স্কোর",
    reports: "রিপোর্ট",
    last_updated: "সর্বশেষ আপডেট",
    domain_age: "ডোমেন বয়স",
    social_media: "সামাজিক মাধ্যম",
    contact_verification: "যোগাযোগ যাচাইকরণ",
    industry: "শিল্প",
    location: "অবস্থান",
    website: "ওয়েবসাইট",
    red_flags: "লাল পতাকা",
    green_flags: "সবুজ পতাকা",
    export_pdf: "PDF রিপোর্ট রপ্তানি করুন",
    salary_analysis: "বেতন বিশ্লেষণ",
    job_quality: "চাকরির বিবরণ গুণমান",
    interview_analysis: "সাক্ষাত্কার প্রক্রিয়া বিশ্লেষণ",
    linkedin_integration: "LinkedIn ইন্টিগ্রেশন",
    indeed_integration: "Indeed ইন্টিগ্রেশন",
    glassdoor_integration: "Glassdoor ইন্টিগ্রেশন",
};
