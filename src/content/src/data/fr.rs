/* src/content/src/data/fr.rs */

// The published French variant of this résumé dropped two experience
// entries and every technology list. Both tables must stay structurally
// paired (see `parity::check`), so the missing entries are carried here
// in French; proper nouns stay as-is.

use crate::model::{
  CertificationEntry, ContactInfo, EducationEntry, ExperienceEntry, LanguageSkill, LocaleTable,
  Profile, ProjectCategory, ProjectEntry, Skill, SkillCategory,
};

pub(super) fn table() -> LocaleTable {
  LocaleTable {
    profile: Profile {
      name: "Belghith Adem".into(),
      headline: "Développeur Full-Stack".into(),
      summary: "Ingénieur en 4ᵉ année en génie logiciel, je suis passionné par la création de \
                solutions innovantes, évolutives et centrées sur l'utilisateur. Je possède une \
                bonne capacité d'adaptation, une forte sensibilité à la qualité du produit et \
                une volonté constante d'apprendre et d'innover."
        .into(),
    },
    contact: ContactInfo {
      email: "BelghithAdem20@gmail.com".into(),
      phone: "+216 29 394 089".into(),
      location: "Tunisie, Ariana".into(),
      linkedin: "https://linkedin.com/in/belghith-adem-92982b197".into(),
      github: "https://github.com/BelghithAdem".into(),
      portfolio: "https://belghithadem.netlify.app/".into(),
    },
    experience: vec![
      ExperienceEntry {
        title: "Stage d'Été".into(),
        organization: "NEXT STEP".into(),
        location: "Ech-Charguia, Tunis, Tunisie".into(),
        period: "08/2025 – 09/2025".into(),
        tasks: vec![
          "Contribution au développement d'une application IA d'assistance intelligente aux \
           tâches."
            .into(),
          "Conception et implémentation d'API REST pour la gestion des données et des \
           workflows."
            .into(),
          "Intégration d'un grand modèle de langage (LLM) pour fournir des suggestions \
           intelligentes."
            .into(),
          "Mise en place d'un accès sécurisé aux données avec permissions par rôle.".into(),
          "Tests et validation des workflows pour garantir fiabilité et scalabilité.".into(),
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
        title: "Développeur Front-End (Mission)".into(),
        organization: "Tadkik".into(),
        location: "Tunisie".into(),
        period: "04/2025 – 09/2025".into(),
        tasks: vec![
          "Développement du front-end d'un SaaS d'audit multi-tenant avec Vue 3.".into(),
          "Intégration d'API REST avec routage et contrôle d'accès par tenant.".into(),
          "Tableaux de bord analytiques avec Chart.js et planification avec FullCalendar."
            .into(),
          "Livraison de composants UI réutilisables et maintenables.".into(),
          "Contribution aux pages produit/marque : TDK CRM, TDK Manager, messagerie sécurisée \
           de la plateforme."
            .into(),
        ],
        technologies: vec![
          "Vue.js".into(),
          "Tailwind CSS".into(),
          "TypeScript".into(),
          "Mercure (temps réel)".into(),
          "shadcn/ui".into(),
          "Lucide.dev".into(),
        ],
      },
      ExperienceEntry {
        title: "Développeur Front-End (Télétravail)".into(),
        organization: "Synque".into(),
        location: "Hong Kong".into(),
        period: "01/2024 – 06/2025".into(),
        tasks: vec![
          "Développement web Vue.js, incluant intégration API REST et résolution de bugs en \
           production."
            .into(),
          "Refonte mobile React Native, axée sur l'UX, la performance et le débogage.".into(),
          "Collaboration avec équipes internationales pour livrer des solutions logicielles \
           fiables et optimisées."
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
        title: "Stage de Fin d'Études".into(),
        organization: "Société des eaux minérales (Sabrine)".into(),
        location: "Tunisie".into(),
        period: "04/2023 – 07/2023".into(),
        tasks: vec![
          "GMAO avec Angular, Node.js (Sails.js) et MongoDB.".into(),
          "Interface utilisateur intuitive pour la maintenance.".into(),
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
          "Système de gestion médicale avec ASP.NET Core backend et Next.js frontend.".into(),
          "Multi-rôles : Docteur, Patient, Admin avec calendrier FullCalendar.".into(),
          "API REST avec Swagger, PostgreSQL et interface Tailwind CSS.".into(),
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
          "Plateforme web/mobile de formation (React/React Native).".into(),
          "Admin panel performant, intégration AWS S3.".into(),
          "Déploiement via Docker + CI/CD GitLab.".into(),
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
          "Site e-commerce WordPress complet avec optimisation SEO avancée.".into(),
          "Intégration paiements sécurisés, gestion des stocks et analytics.".into(),
          "Performance optimisée, responsive design et référencement naturel.".into(),
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
          "Boutique en ligne WordPress spécialisée dans la poterie et décoration.".into(),
          "Catalogue complet avec pots, mugs, assiettes et objets décoratifs.".into(),
          "Système de commande personnalisée et cours de poterie intégrés.".into(),
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
          "Application web moderne pour la lecture du Coran.".into(),
          "Interface utilisateur intuitive avec Vue 3 + Vite.".into(),
          "Fonctionnalités de recherche et navigation avancées.".into(),
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
          "Réseau social sécurisé avec messagerie en temps réel.".into(),
          "Authentification 2FA, WebSocket.".into(),
          "Stack : Spring Boot, Angular, Hibernate, Tailwind, MySQL.".into(),
        ],
      },
    ],
    skills: vec![
      SkillCategory {
        name: "Front-End".into(),
        skills: vec![
          Skill { name: "Angular".into(), level: "Éducatif".into() },
          Skill { name: "Vue.js".into(), level: "Pro".into() },
          Skill { name: "React".into(), level: "Pro".into() },
          Skill { name: "Next.js".into(), level: "Pro".into() },
          Skill { name: "Tailwind CSS".into(), level: "Pro".into() },
        ],
      },
      SkillCategory {
        name: "Back-End".into(),
        skills: vec![
          Skill { name: "Spring Boot".into(), level: "Éducatif".into() },
          Skill { name: "Node.js".into(), level: "Pro".into() },
          Skill { name: "Express.js".into(), level: "Pro".into() },
          Skill { name: "GraphQL".into(), level: "Pro".into() },
          Skill { name: "REST API".into(), level: "Pro".into() },
          Skill { name: "WebSocket".into(), level: "Pro".into() },
        ],
      },
      SkillCategory {
        name: "Bases de données".into(),
        skills: vec![
          Skill { name: "MongoDB".into(), level: "Éducatif".into() },
          Skill { name: "PostgreSQL".into(), level: "Éducatif".into() },
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
        location: "Ariana, Tunisie".into(),
        program: "Diplôme d'Ingénieur en Génie Logiciel et Systèmes d'Information".into(),
        period: "2023 – Présent".into(),
        ongoing: true,
        description: String::new(),
      },
      EducationEntry {
        institution: "ISET".into(),
        location: "Kairouan, Tunisie".into(),
        program: "Licence en Technologie Informatique".into(),
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
      LanguageSkill { name: "Anglais".into(), level: "Courant".into() },
      LanguageSkill { name: "Français".into(), level: "Compétent".into() },
      LanguageSkill { name: "Arabe".into(), level: "Langue maternelle".into() },
    ],
  }
}
