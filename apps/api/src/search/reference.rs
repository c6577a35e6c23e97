//! Fixed reference lists behind autocomplete and the popular-company bonus.

pub const POPULAR_SKILLS: &[&str] = &[
    "React", "JavaScript", "TypeScript", "Node.js", "Python", "Java", "AWS", "Docker",
    "Kubernetes", "Angular", "Vue.js", "PHP", "Laravel", "MySQL", "PostgreSQL",
    "MongoDB", "Redis", "GraphQL", "REST API", "Microservices", "DevOps", "CI/CD",
    "Terraform", "Jenkins", "Git", "Agile", "Scrum", "Product Management", "UI/UX",
    "Figma", "Adobe Creative Suite", "Data Science", "Machine Learning", "SQL",
    "Tableau", "Power BI", "Excel", "SAP", "Oracle", "Salesforce", "Azure",
];

pub const POPULAR_COMPANIES: &[&str] = &[
    "Emirates NBD", "ADCB", "FAB", "Mashreq Bank", "CBD", "HSBC UAE",
    "Careem", "Noon", "Talabat", "Deliveroo", "Uber", "Amazon", "Microsoft UAE",
    "Google UAE", "Meta UAE", "Apple UAE", "Etisalat", "du", "Aramex",
    "DP World", "Emirates", "Flydubai", "ADNOC", "Mubadala", "ADIA",
    "Dubai Holdings", "Emaar", "Majid Al Futtaim", "Chalhoub Group",
];

pub const LOCATIONS: &[&str] = &[
    "Dubai", "Abu Dhabi", "Sharjah", "Ajman", "Fujairah", "Ras Al Khaimah", "Umm Al Quwain",
    "Dubai Marina", "Downtown Dubai", "DIFC", "Dubai Internet City", "Dubai Media City",
    "Dubai Silicon Oasis", "Jumeirah", "Deira", "Bur Dubai", "Business Bay",
    "Abu Dhabi Global Market", "Al Ain", "Masdar City", "Yas Island",
    "Dubai South", "Al Barsha", "Sheikh Zayed Road", "Karama", "Satwa",
];

pub const JOB_TITLES: &[&str] = &[
    "Software Engineer", "Senior Developer", "Full Stack Developer", "Frontend Developer",
    "Backend Developer", "DevOps Engineer", "Data Scientist", "Product Manager",
    "UI/UX Designer", "Project Manager", "Business Analyst", "QA Engineer",
    "Mobile Developer", "Cloud Architect", "Technical Lead", "Engineering Manager",
    "Scrum Master", "Data Analyst", "Marketing Manager", "Sales Manager",
    "HR Manager", "Finance Manager", "Operations Manager", "Consultant",
];

/// Exact-name membership in the popular-company list.
pub fn is_popular_company(company: &str) -> bool {
    POPULAR_COMPANIES.contains(&company)
}
