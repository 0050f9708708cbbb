//! Bundled default content catalog.
//!
//! Every editable block on the public site has a fallback here, so the pages
//! render fully on a fresh deployment before anything has been edited
//! remotely. Ids are grouped by page prefix; the declaration order below is
//! the order the sections appear on their pages.

use innovation_school_core::{ContentSection, SectionId};

fn section(id: &str, title: &str, body: &str) -> ContentSection {
    ContentSection {
        id: SectionId::new(id),
        title: title.to_owned(),
        body: body.to_owned(),
        is_published: true,
    }
}

/// The full default catalog, in page order.
#[must_use]
pub fn bundled_sections() -> Vec<ContentSection> {
    vec![
        // Home page
        section("home-hero-title", "Hero Title", "Innovation Public School"),
        section(
            "home-hero-tagline",
            "Hero Tagline",
            "Shaping Tomorrow's Leaders",
        ),
        section(
            "home-about",
            "About the School",
            "Innovation Public School is a premier educational institution committed to nurturing young minds and fostering holistic development. With state-of-the-art facilities, experienced faculty, and a student-centric approach, we provide an environment where every child can thrive academically, socially, and emotionally.",
        ),
        section(
            "home-achievements",
            "Achievements & Highlights",
            "\u{2022} 100% Pass Rate in Board Examinations\n\u{2022} National Award for Excellence in Education 2025\n\u{2022} State Champions in Inter-School Sports Meet\n\u{2022} 50+ Students Selected for National Level Competitions\n\u{2022} ISO 9001:2015 Certified Institution",
        ),
        // About page
        section(
            "about-vision",
            "Vision & Mission",
            "Our Vision: To be a center of excellence in education, nurturing responsible global citizens who are equipped with knowledge, skills, and values to make a positive impact on society.\n\nOur Mission: To provide quality education that empowers students to achieve their full potential through innovative teaching methods, character building, and holistic development in a safe and supportive environment.",
        ),
        section(
            "about-principal",
            "Principal's Message",
            "Dear Parents and Students,\n\nWelcome to Innovation Public School! It is my privilege to lead an institution that stands for excellence, integrity, and innovation. Our dedicated team of educators works tirelessly to create a nurturing environment where every student can discover their unique talents and reach their highest potential.\n\nWe believe in the holistic development of our students, focusing not just on academic excellence but also on character building, critical thinking, and creativity. Together, let us shape a brighter future for our children.\n\nWarm regards,\nDr. Priya Sharma\nPrincipal",
        ),
        section(
            "about-values",
            "Our Values",
            "\u{2022} Excellence: We strive for the highest standards in everything we do\n\u{2022} Integrity: We uphold honesty, transparency, and ethical conduct\n\u{2022} Innovation: We embrace creativity and forward-thinking approaches\n\u{2022} Respect: We value diversity and treat everyone with dignity\n\u{2022} Responsibility: We foster accountability and social consciousness\n\u{2022} Collaboration: We believe in teamwork and community partnership",
        ),
        section(
            "about-history",
            "School History",
            "Founded in 1995, Innovation Public School began with a vision to provide quality education accessible to all. Starting with just 50 students, we have grown into a thriving institution serving over 2,000 students from Pre-Primary to Senior Secondary levels.\n\nOver the years, we have consistently maintained our commitment to academic excellence while adapting to modern educational needs. Our journey has been marked by numerous achievements, infrastructure development, and the introduction of innovative teaching methodologies that prepare students for the challenges of the 21st century.",
        ),
        section(
            "about-management",
            "Management Team",
            "Our school is guided by an experienced management team:\n\n\u{2022} Dr. Rajesh Kumar - Chairman, Education Trust\n\u{2022} Mrs. Anjali Verma - Vice Chairperson\n\u{2022} Dr. Priya Sharma - Principal\n\u{2022} Mr. Suresh Patel - Vice Principal (Academics)\n\u{2022} Ms. Meera Singh - Vice Principal (Administration)\n\u{2022} Mr. Arun Desai - Coordinator (Primary Section)\n\u{2022} Mrs. Kavita Reddy - Coordinator (Secondary Section)",
        ),
        // Academics page
        section(
            "academics-curriculum",
            "Curriculum",
            "We follow the CBSE curriculum, designed to provide a comprehensive and balanced education. Our curriculum emphasizes:\n\n\u{2022} Strong foundation in core subjects (Mathematics, Science, Languages, Social Studies)\n\u{2022} Integration of technology in learning\n\u{2022} Focus on conceptual understanding rather than rote learning\n\u{2022} Regular assessments and continuous evaluation\n\u{2022} Alignment with national education standards",
        ),
        section(
            "academics-subjects",
            "Subjects Offered",
            "Primary Level: English, Hindi, Mathematics, Environmental Studies, Computer Science, Art & Craft, Physical Education\n\nSecondary Level: English, Hindi, Mathematics, Science (Physics, Chemistry, Biology), Social Studies, Computer Science, Physical Education\n\nSenior Secondary: Science Stream (PCM/PCB), Commerce Stream, Humanities Stream with multiple elective options",
        ),
        section(
            "academics-teaching",
            "Teaching Methods",
            "Our innovative teaching approaches include:\n\n\u{2022} Interactive and experiential learning\n\u{2022} Smart classroom technology integration\n\u{2022} Project-based learning and group activities\n\u{2022} Hands-on laboratory experiments\n\u{2022} Regular field trips and educational excursions\n\u{2022} Guest lectures by industry experts\n\u{2022} Personalized attention and remedial classes\n\u{2022} Use of audio-visual aids and digital resources",
        ),
        section(
            "academics-exams",
            "Exams & Assessment",
            "We follow a comprehensive assessment system:\n\n\u{2022} Continuous and Comprehensive Evaluation (CCE)\n\u{2022} Periodic tests and unit assessments\n\u{2022} Half-yearly and annual examinations\n\u{2022} Project work and practical assessments\n\u{2022} Regular parent-teacher meetings\n\u{2022} Detailed progress reports\n\u{2022} Focus on both scholastic and co-scholastic areas",
        ),
        section(
            "academics-cocurricular",
            "Co-curricular Activities",
            "We offer a wide range of activities for holistic development:\n\n\u{2022} Sports: Cricket, Football, Basketball, Athletics, Yoga\n\u{2022} Arts: Music, Dance, Drama, Painting, Craft\n\u{2022} Clubs: Science Club, Math Club, Literary Club, Eco Club, Robotics Club\n\u{2022} Competitions: Debates, Quiz, Elocution, Essay Writing\n\u{2022} Cultural Programs and Annual Day celebrations\n\u{2022} Community service and social awareness programs",
        ),
        // Admissions page
        section(
            "admissions-process",
            "Admission Process",
            "Step 1: Fill out the online enquiry form or visit the school office\nStep 2: Collect the admission form and prospectus\nStep 3: Submit the completed form with required documents\nStep 4: Attend the interaction/assessment (for applicable classes)\nStep 5: Await admission confirmation\nStep 6: Complete fee payment and formalities\nStep 7: Receive admission confirmation and welcome kit",
        ),
        section(
            "admissions-eligibility",
            "Eligibility Criteria",
            "Pre-Primary (Nursery): Minimum age 3 years as on March 31st\nPre-Primary (LKG): Minimum age 4 years as on March 31st\nPre-Primary (UKG): Minimum age 5 years as on March 31st\nClass I: Minimum age 6 years as on March 31st\n\nFor higher classes: Age-appropriate admission with transfer certificate from previous school. Assessment may be conducted for Classes II onwards.",
        ),
        section(
            "admissions-documents",
            "Required Documents",
            "\u{2022} Birth Certificate (original for verification)\n\u{2022} Aadhar Card of child and parents\n\u{2022} Recent passport-size photographs (4 copies)\n\u{2022} Transfer Certificate (for Classes II and above)\n\u{2022} Previous year's report card\n\u{2022} Caste certificate (if applicable)\n\u{2022} Address proof (Electricity bill/Ration card)\n\u{2022} Medical fitness certificate\n\u{2022} Blood group certificate",
        ),
    ]
}
