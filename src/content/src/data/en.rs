/* src/content/src/data/en.rs */

use crate::model::{
  CertificationEntry, ContactInfo, EducationEntry, ExperienceEntry, LanguageSkill, LocaleTable,
  Profile, ProjectCategory, ProjectEntry, Skill, SkillCategory,
};

pub(super) fn table() -> LocaleTable {
  LocaleTable {
    profile: Profile {
      name: "Belghith Adem".into(),
      headline: "Full-Stack Developer".into(),
      summary: "4th year software engineering student, I am passionate about creating \
                innovative, scalable, and user-centered solutions. I have good adaptability, \
                strong product quality sensitivity, and a constant willingness to learn and \
                innovate."
        .into(),
    },
    contact: ContactInfo {
      email: "BelghithAdem20@gmail.com".into(),
      phone: "+216 29 394 089".into(),
      location: "Tunisia, Ariana".into(),
      linkedin: "https://linkedin.com/in/belghith-adem-92982b197".into(),
      github: "https://github.com/BelghithAdem".into(),
      portfolio: "https://belghithadem.netlify.app/".into(),
    },
    experience: vec![
      ExperienceEntry {
        title: "Summer Internship".into(),
        organization: "NEXT STEP".into(),
        location: "Ech-Charguia, Tunis, Tunisia".into(),
        period: "08/2025 – 09/2025".into(),
        tasks: vec![
          "Contributed to the development of an AI-powered application for smart task \
           assistance."
            .into(),
          "Designed and implemented REST APIs for data and workflow management.".into(),
          "Integrated a Large Language Model (LLM) to provide intelligent suggestions.".into(),
          "Implemented secure data access with role-based permissions.".into(),
          "Tested and validated workflows to ensure system reliability and scalability.".into(),
        ],
        technologies: vec![
          "FastAPI".into(),
          "MongoDB Atlas".into(),
          "Next.js".into(),
          "Node.js".into(),
          "Google Gemini".into(),
          "Large Language Models (LLM)".into(),
        ],
      },
      ExperienceEntry {
        title: "Front-End Developer (Mission)".into(),
        organization: "Tadkik".into(),
        location: "Tunisia".into(),
        period: "04/2025 – 09/2025".into(),
        tasks: vec![
          "Built a multi-tenant audit SaaS front-end with Vue 3.".into(),
          "Integrated REST APIs with tenant-aware routing and access control.".into(),
          "Implemented analytics dashboards with Chart.js and scheduling with FullCalendar."
            .into(),
          "Delivered reusable and maintainable UI components.".into(),
          "Contributed to product/branding pages: TDK CRM, TDK Manager, secure platform \
           messaging."
            .into(),
        ],
        technologies: vec![
          "Vue.js".into(),
          "Tailwind CSS".into(),
          "TypeScript".into(),
          "Mercure (real-time)".into(),
          "shadcn/ui".into(),
          "Lucide.dev".into(),
        ],
      },
      ExperienceEntry {
        title: "Front-End Developer (Remote)".into(),
        organization: "Synque".into(),
        location: "Hong Kong".into(),
        period: "01/2024 – 06/2025".into(),
        tasks: vec![
          "Vue.js web development, including REST API integration and production bug \
           resolution."
            .into(),
          "React Native mobile redesign, focused on UX, performance, and debugging.".into(),
          "Collaboration with international teams to deliver reliable and optimized software \
           solutions."
            .into(),
        ],
        technologies: vec![
          "Vue.js".into(),
          "React Native".into(),
          "Next.js".into(),
          "GraphQL".into(),
          "Express.js".into(),
        ],
      },
      ExperienceEntry {
        title: "Final Year Internship".into(),
        organization: "Mineral Water Company (Sabrine)".into(),
        location: "Tunisia".into(),
        period: "04/2023 – 07/2023".into(),
        tasks: vec![
          "CMMS with Angular, Node.js (Sails.js) and MongoDB.".into(),
          "Intuitive user interface for maintenance.".into(),
        ],
        technologies: vec![
          "Angular".into(),
          "Node.js".into(),
          "MongoDB".into(),
          "Sails.js".into(),
          "GMAO".into(),
        ],
      },
    ],
    projects: vec![
      ProjectEntry {
        name: "Medical Recording".into(),
        period: "01/05/2025 – 06/07/2025".into(),
        image: "/assets/images/projects/recordMedical.png".into(),
        repository: "https://github.com/BelghithAdem/Medical_Record".into(),
        live: String::new(),
        category: ProjectCategory::Academic,
        description: vec![
          "Medical management system with ASP.NET Core backend and Next.js frontend.".into(),
          "Multi-role: Doctor, Patient, Admin with FullCalendar integration.".into(),
          "REST API with Swagger, PostgreSQL and Tailwind CSS interface.".into(),
        ],
      },
      ProjectEntry {
        name: "Mincraft".into(),
        period: "01/2025 – 02/2025".into(),
        image: "/assets/images/projects/Mincraft.png".into(),
        repository: "https://gitlab.com/BelghithAdem/mincraft_frontend".into(),
        live: "https://mincraft-project-frontend.vercel.app/".into(),
        category: ProjectCategory::Academic,
        description: vec![
          "Web/mobile training platform (React/React Native).".into(),
          "High-performance admin panel, AWS S3 integration.".into(),
          "Deployment via Docker + GitLab CI/CD.".into(),
        ],
      },
      ProjectEntry {
        name: "Tech Gateway".into(),
        period: "01/2025 – 03/2025".into(),
        image: "/assets/images/projects/techgateway.png".into(),
        repository: String::new(),
        live: "https://techgateway.com.tn".into(),
        category: ProjectCategory::Professional,
        description: vec![
          "Complete WordPress e-commerce site with advanced SEO optimization.".into(),
          "Secure payment integration, inventory management and analytics.".into(),
          "Optimized performance, responsive design and natural referencing.".into(),
        ],
      },
      ProjectEntry {
        name: "Dhiya Store".into(),
        period: "12/2024 – 02/2025".into(),
        image: "/assets/images/projects/dihyastore.png".into(),
        repository: String::new(),
        live: "https://dihyastore.com/".into(),
        category: ProjectCategory::Professional,
        description: vec![
          "WordPress online store specialized in pottery and decoration.".into(),
          "Complete catalog with pots, mugs, plates and decorative objects.".into(),
          "Custom ordering system and integrated pottery courses.".into(),
        ],
      },
      ProjectEntry {
        name: "Quran App".into(),
        period: "03/2024 – 04/2024".into(),
        image: "/assets/images/projects/qran.png".into(),
        repository: "https://github.com/BelghithAdem/quran-app".into(),
        live: "https://quran-web-app.pages.dev/".into(),
        category: ProjectCategory::Academic,
        description: vec![
          "Modern web application for Quran reading.".into(),
          "Intuitive user interface with Vue 3 + Vite.".into(),
          "Advanced search and navigation features.".into(),
        ],
      },
      ProjectEntry {
        name: "Social Media".into(),
        period: "09/2024 – 12/2024".into(),
        image: "/assets/images/projects/Social1.png".into(),
        repository: "https://github.com/BelghithAdem/Media".into(),
        live: String::new(),
        category: ProjectCategory::Academic,
        description: vec![
          "Secure social network with real-time messaging.".into(),
          "2FA authentication, WebSocket.".into(),
          "Stack: Spring Boot, Angular, Hibernate, Tailwind, MySQL.".into(),
        ],
      },
    ],
    skills: vec![
      SkillCategory {
        name: "Frontend".into(),
        skills: vec![
          Skill { name: "Angular".into(), level: "Educational".into() },
          Skill { name: "Vue.js".into(), level: "Pro".into() },
          Skill { name: "React".into(), level: "Pro".into() },
          Skill { name: "Next.js".into(), level: "Pro".into() },
          Skill { name: "Tailwind CSS".into(), level: "Pro".into() },
        ],
      },
      SkillCategory {
        name: "Backend".into(),
        skills: vec![
          Skill { name: "Spring Boot".into(), level: "Educational".into() },
          Skill { name: "Node.js".into(), level: "Pro".into() },
          Skill { name: "Express.js".into(), level: "Pro".into() },
          Skill { name: "GraphQL".into(), level: "Pro".into() },
          Skill { name: "REST API".into(), level: "Pro".into() },
          Skill { name: "WebSocket".into(), level: "Pro".into() },
        ],
      },
      SkillCategory {
        name: "Databases".into(),
        skills: vec![
          Skill { name: "MongoDB".into(), level: "Educational".into() },
          Skill { name: "PostgreSQL".into(), level: "Educational".into() },
          Skill { name: "MySQL".into(), level: "Pro".into() },
          Skill { name: "MongoDB".into(), level: "Pro".into() },
        ],
      },
      SkillCategory {
        name: "DevOps".into(),
        skills: vec![
          Skill { name: "Docker".into(), level: "Pro".into() },
          Skill { name: "Docker Compose".into(), level: "Pro".into() },
          Skill { name: "GitLab CI/CD".into(), level: "Pro".into() },
        ],
      },
    ],
    education: vec![
      EducationEntry {
        institution: "Tek-up University".into(),
        location: "Ariana, Tunisia".into(),
        program: "Software Engineering and Information Systems Engineering Degree".into(),
        period: "2023 – Present".into(),
        ongoing: true,
        description: String::new(),
      },
      EducationEntry {
        institution: "ISET".into(),
        location: "Kairouan, Tunisia".into(),
        program: "Computer Technology License".into(),
        period: "2020 – 2023".into(),
        ongoing: false,
        description: String::new(),
      },
    ],
    certifications: vec![
      CertificationEntry {
        name: "Full Stack Spring Boot 3".into(),
        issuer: "Udemy".into(),
        date: "2024".into(),
        url: "https://www.udemy.com/certificate/UC-45a85e28-6ba5-4ef9-bb27-1094c0b73426/".into(),
      },
      CertificationEntry {
        name: "Docker Certification".into(),
        issuer: "Udemy".into(),
        date: "2023".into(),
        url: "https://www.udemy.com/certificate/UC-25dc890e-931f-448a-91ad-9b65be392408/".into(),
      },
      CertificationEntry {
        name: "Agile Fundamentals".into(),
        issuer: "SCRUMstudy".into(),
        date: "2024".into(),
        url: "https://www.scrumstudy.com/certification/verify?type=SFC&number=1009321".into(),
      },
    ],
    languages: vec![
      LanguageSkill { name: "English".into(), level: "Fluent".into() },
      LanguageSkill { name: "French".into(), level: "Competent".into() },
      LanguageSkill { name: "Arabic".into(), level: "Native".into() },
    ],
  }
}
