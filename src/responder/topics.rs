//! Static topic rule table.
//!
//! Order matters: rules are not mutually exclusive and the first match wins.
//! `FALLBACK` answers when none of them fire.

use super::rules::{Replies, Topic, TopicRule, Trigger};

pub(super) static TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        topic: Topic::Greeting,
        trigger: Trigger::Any(&[
            "hello",
            "hi",
            "hey",
            "start",
            "kumusta",
            "kumusta ka",
            "musta",
            "kamusta",
            "kamusta ka",
        ]),
        replies: Replies {
            english: "Hello! I'm Hestia, your Tourism & Hospitality Department assistant. How can I help you today? 👋\n\nQuick Questions:\n• Tell me about the programs\n• What are the industry partnerships?\n• What events and competitions are there?\n• What practical training is included?\n• What are the extra costs?\n• What's the academic content like?\n• What jobs can I get?\n• Do I need to do a thesis?\n• Who developed this?",
            tagalog: "Kumusta! Ako si Hestia, ang inyong Tourism & Hospitality Department assistant. Paano ko kayo matutulungan ngayon? 👋\n\nMabilis na mga tanong:\n• Sabihin mo sa akin ang mga programa\n• Ano ang mga industry partnerships?\n• Ano ang mga events at competitions?\n• Ano ang practical training?\n• Ano ang mga extra costs?\n• Ano ang academic content?\n• Ano ang mga trabaho na makukuha ko?\n• Kailangan ba ako mag-thesis?\n• Sino ang nag-develop nito?",
            bisaya: "Kumusta! Ako si Hestia, ang inyong Tourism & Hospitality Department assistant. Unsaon ko ninyo matabang karon? 👋\n\nMga paspas nga pangutana:\n• Sultihi ko bahin sa mga programa\n• Unsa ang mga industry partnerships?\n• Unsa ang mga events ug competitions?\n• Unsa ang practical training?\n• Unsa ang mga extra costs?\n• Unsa ang academic content?\n• Unsa ang mga trabaho nga makakuha nako?\n• Kinahanglan ba ko mag-thesis?\n• Kinsa ang nag-develop niini?",
        },
    },
    TopicRule {
        topic: Topic::Programs,
        trigger: Trigger::Any(&[
            "program", "bstm", "bshm", "course", "degree", "programa", "kurso",
        ]),
        replies: Replies {
            english: "We offer two programs:\n\n🏛️ **BSTM – Bachelor of Science in Tourism Management**\nFocuses on airlines, travel agencies, tour guiding, events, and destinations.\n\n🏨 **BSHM – Bachelor of Science in Hospitality Management**\nFocuses on hotels, restaurants, cooking, events, and customer service.",
            tagalog: "May dalawang programa:\n\n🏛️ **BSTM – Bachelor of Science in Tourism Management**\nNakatuon sa airlines, travel agencies, tour guiding, events, at destinations.\n\n🏨 **BSHM – Bachelor of Science in Hospitality Management**\nNakatuon sa hotels, restaurants, cooking, events, at customer service.",
            bisaya: "Adunay duha ka programa:\n\n🏛️ **BSTM – Bachelor of Science in Tourism Management**\nNakafocus sa airlines, travel agencies, tour guiding, events, ug destinations.\n\n🏨 **BSHM – Bachelor of Science in Hospitality Management**\nNakafocus sa hotels, restaurants, cooking, events, ug customer service.",
        },
    },
    TopicRule {
        topic: Topic::Partnerships,
        trigger: Trigger::Any(&["partnership", "industry", "partner", "company"]),
        replies: Replies {
            english: "Yes! We have partnerships with **Air Asia** and many other industry leaders:\n\n• Bayfront Cebu\n• Bohol Bee Farm\n• Discovery Prime Makati\n• Department of Tourism Manila Philippines\n• Ecoscape Travel & Tours\n• Fuente Pension House\n• Fuente Hotel de Cebu\n• Hotel Celeste Makati\n• Jeju Air\n• Kinglyahan Forest Park\n• Kyle's Restaurant\n• La Carmela de Boracay\n• Marina Sea View\n• Marzon Beach Resort, Boracay\n• Nustar Resort and Casino\n• Rio Verde Floating Restaurant\n• Tambuli Seaside Resort and Spa\n• The Mark Resort Cebu\n• Waterfront Mactan / Waterfront Lahug",
            tagalog: "Oo! May partnerships sa **Air Asia** at marami pang ibang industry leaders:\n\n• Bayfront Cebu\n• Bohol Bee Farm\n• Discovery Prime Makati\n• Department of Tourism Manila Philippines\n• Ecoscape Travel & Tours\n• Fuente Pension House\n• Fuente Hotel de Cebu\n• Hotel Celeste Makati\n• Jeju Air\n• Kinglyahan Forest Park\n• Kyle's Restaurant\n• La Carmela de Boracay\n• Marina Sea View\n• Marzon Beach Resort, Boracay\n• Nustar Resort and Casino\n• Rio Verde Floating Restaurant\n• Tambuli Seaside Resort and Spa\n• The Mark Resort Cebu\n• Waterfront Mactan / Waterfront Lahug",
            bisaya: "Oo! Adunay partnerships sa **Air Asia** ug daghan pang ubang industry leaders:\n\n• Bayfront Cebu\n• Bohol Bee Farm\n• Discovery Prime Makati\n• Department of Tourism Manila Philippines\n• Ecoscape Travel & Tours\n• Fuente Pension House\n• Fuente Hotel de Cebu\n• Hotel Celeste Makati\n• Jeju Air\n• Kinglyahan Forest Park\n• Kyle's Restaurant\n• La Carmela de Boracay\n• Marina Sea View\n• Marzon Beach Resort, Boracay\n• Nustar Resort and Casino\n• Rio Verde Floating Restaurant\n• Tambuli Seaside Resort and Spa\n• The Mark Resort Cebu\n• Waterfront Mactan / Waterfront Lahug",
        },
    },
    TopicRule {
        topic: Topic::Events,
        trigger: Trigger::Any(&["event", "competition", "contest", "activity"]),
        replies: Replies {
            english: "Yes! The department organizes a multi-day event featuring competitions like **bartending, market basket, tray relay, housekeeping, airline voice over, tour guiding/vlogging, and hair & makeup**. 🏆",
            tagalog: "Oo! Ang department ay nag-organize ng multi-day event na may competitions tulad ng **bartending, market basket, tray relay, housekeeping, airline voice over, tour guiding/vlogging, at hair & makeup**. 🏆",
            bisaya: "Oo! Ang department nag-organize og multi-day event nga adunay competitions sama sa **bartending, market basket, tray relay, housekeeping, airline voice over, tour guiding/vlogging, ug hair & makeup**. 🏆",
        },
    },
    TopicRule {
        topic: Topic::Training,
        trigger: Trigger::Any(&["training", "practical", "internship", "ojt"]),
        replies: Replies {
            english: "Labs and simulations in both programs, plus internships via industry partners to give you real-world experience in professional environments. 💼",
            tagalog: "Labs at simulations sa dalawang programa, plus internships sa pamamagitan ng industry partners upang makakuha kayo ng real-world experience sa professional environments. 💼",
            bisaya: "Labs ug simulations sa duha ka programa, plus internships pinaagi sa industry partners aron makakuha mo og real-world experience sa professional environments. 💼",
        },
    },
    TopicRule {
        topic: Topic::Costs,
        trigger: Trigger::Any(&[
            "cost", "expense", "fee", "money", "price", "gasto", "bayad", "kwarta",
        ]),
        replies: Replies {
            english: "Additional expenses for **Lab Uniform, culinary ingredients, Event participation fees (MICE), and OJT requirements**. 💰",
            tagalog: "Karagdagang gastos para sa **Lab Uniform, culinary ingredients, Event participation fees (MICE), at OJT requirements**. 💰",
            bisaya: "Additional expenses para sa **Lab Uniform, culinary ingredients, Event participation fees (MICE), ug OJT requirements**. 💰",
        },
    },
    TopicRule {
        topic: Topic::Academics,
        trigger: Trigger::Any(&["academic", "content", "subject", "study", "curriculum"]),
        replies: Replies {
            english: "Heavy on memorization (maps, cultures), system use like **Amadeus, Property Management System (PMS)**, and event planning (MICE). 📚",
            tagalog: "Mabigat sa memorization (maps, cultures), system use tulad ng **Amadeus, Property Management System (PMS)**, at event planning (MICE). 📚",
            bisaya: "Heavy sa memorization (maps, cultures), system use sama sa **Amadeus, Property Management System (PMS)**, ug event planning (MICE). 📚",
        },
    },
    TopicRule {
        topic: Topic::Careers,
        trigger: Trigger::Any(&[
            "job",
            "career",
            "graduate",
            "work",
            "employment",
            "trabaho",
            "trabahoan",
        ]),
        replies: Replies {
            english: "**BSTM graduates can become:**\n• Travel or tour agents\n• Flight attendants\n• Tourism officers\n• Event organizers\n\n**BSHM graduates can become:**\n• Hotel or resort managers\n• Chefs or kitchen supervisors\n• Front desk managers\n• F&B supervisors",
            tagalog: "**BSTM graduates ay maaaring maging:**\n• Travel o tour agents\n• Flight attendants\n• Tourism officers\n• Event organizers\n\n**BSHM graduates ay maaaring maging:**\n• Hotel o resort managers\n• Chefs o kitchen supervisors\n• Front desk managers\n• F&B supervisors",
            bisaya: "**BSTM graduates makahimong:**\n• Travel o tour agents\n• Flight attendants\n• Tourism officers\n• Event organizers\n\n**BSHM graduates makahimong:**\n• Hotel o resort managers\n• Chefs o kitchen supervisors\n• Front desk managers\n• F&B supervisors",
        },
    },
    TopicRule {
        topic: Topic::Thesis,
        trigger: Trigger::Any(&["thesis", "research", "project"]),
        replies: Replies {
            english: "Yes, usually in your **3rd or 4th year** you'll complete a thesis or research project as part of your degree requirements. 📝",
            tagalog: "Oo, kadalasan sa inyong **3rd o 4th year** makakumpleto kayo ng thesis o research project bilang bahagi ng inyong degree requirements. 📝",
            bisaya: "Oo, kasagaran sa inyong **3rd o 4th year** makompleto ninyo ang thesis o research project isip bahin sa inyong degree requirements. 📝",
        },
    },
    TopicRule {
        topic: Topic::Dean,
        trigger: Trigger::Any(&["dean", "head", "director"]),
        replies: Replies {
            english: "The **Dean of the Tourism & Hospitality Department** leads both the BSTM and BSHM programs and oversees faculty, curriculum, and student affairs. 🎓\n\nFor appointments or concerns, please visit the department office at Saint Joseph College, Maasin City.",
            tagalog: "Ang **Dean ng Tourism & Hospitality Department** ang namumuno sa BSTM at BSHM programs at nangangasiwa sa faculty, curriculum, at student affairs. 🎓\n\nPara sa appointments o concerns, pakibisita ang department office sa Saint Joseph College, Maasin City.",
            bisaya: "Ang **Dean sa Tourism & Hospitality Department** maoy nangulo sa BSTM ug BSHM programs ug nagdumala sa faculty, curriculum, ug student affairs. 🎓\n\nPara sa appointments o concerns, palihug bisitaha ang department office sa Saint Joseph College, Maasin City.",
        },
    },
    TopicRule {
        topic: Topic::FullTimeInstructors,
        trigger: Trigger::Either(&[
            Trigger::Any(&["full-time", "fulltime", "full time"]),
            Trigger::All(&[&["instructor"], &["full"]]),
        ]),
        replies: Replies {
            english: "Our **full-time instructors** handle the core BSTM and BSHM subjects, laboratory classes, and OJT supervision. 👩‍🏫\n\nFor the current list of full-time faculty, please ask at the department office.",
            tagalog: "Ang aming **full-time instructors** ang humahawak sa core BSTM at BSHM subjects, laboratory classes, at OJT supervision. 👩‍🏫\n\nPara sa kasalukuyang listahan ng full-time faculty, magtanong lang sa department office.",
            bisaya: "Ang among **full-time instructors** maoy nagdumala sa core BSTM ug BSHM subjects, laboratory classes, ug OJT supervision. 👩‍🏫\n\nPara sa bag-ong listahan sa full-time faculty, pangutana lang sa department office.",
        },
    },
    TopicRule {
        topic: Topic::PartTimeInstructors,
        trigger: Trigger::Either(&[
            Trigger::Any(&["part-time", "parttime", "part time"]),
            Trigger::All(&[&["instructor"], &["part"]]),
        ]),
        replies: Replies {
            english: "Our **part-time instructors** are industry practitioners who teach specialized subjects and share real-world experience from hotels, airlines, and travel agencies. 🧑‍💼\n\nFor the current list of part-time faculty, please ask at the department office.",
            tagalog: "Ang aming **part-time instructors** ay mga industry practitioners na nagtuturo ng specialized subjects at nagbabahagi ng real-world experience mula sa hotels, airlines, at travel agencies. 🧑‍💼\n\nPara sa kasalukuyang listahan ng part-time faculty, magtanong lang sa department office.",
            bisaya: "Ang among **part-time instructors** mga industry practitioners nga nagtudlo og specialized subjects ug nagpaambit og real-world experience gikan sa hotels, airlines, ug travel agencies. 🧑‍💼\n\nPara sa bag-ong listahan sa part-time faculty, pangutana lang sa department office.",
        },
    },
    TopicRule {
        topic: Topic::Instructors,
        trigger: Trigger::Any(&["instructor", "teacher", "faculty", "professor"]),
        replies: Replies {
            english: "The department has both **full-time** and **part-time** instructors covering tourism, hospitality, culinary, and events management. 👨‍🏫\n\nAsk me about full-time or part-time instructors to learn more.",
            tagalog: "Ang department ay may **full-time** at **part-time** instructors para sa tourism, hospitality, culinary, at events management. 👨‍🏫\n\nMagtanong tungkol sa full-time o part-time instructors para sa karagdagang impormasyon.",
            bisaya: "Ang department adunay **full-time** ug **part-time** instructors para sa tourism, hospitality, culinary, ug events management. 👨‍🏫\n\nPangutana bahin sa full-time o part-time instructors para sa dugang impormasyon.",
        },
    },
    TopicRule {
        topic: Topic::Developers,
        trigger: Trigger::Any(&[
            "develop", "create", "who", "made", "author", "kinsa", "sino",
        ]),
        replies: Replies {
            english: "This chatbot was created by **Group AUZA**, a team of 4th-year BSIT students:\n\n• Francisco Dag-uman\n• Martin John Bacho\n• Ryan Galano\n• Ramsil Calapre",
            tagalog: "Ang chatbot na ito ay ginawa ng **Group AUZA**, isang team ng 4th-year BSIT students:\n\n• Francisco Dag-uman\n• Martin John Bacho\n• Ryan Galano\n• Ramsil Calapre",
            bisaya: "Kini nga chatbot gihimo sa **Group AUZA**, usa ka team sa 4th-year BSIT students:\n\n• Francisco Dag-uman\n• Martin John Bacho\n• Ryan Galano\n• Ramsil Calapre",
        },
    },
    TopicRule {
        topic: Topic::Gratitude,
        trigger: Trigger::Any(&["thank", "thanks", "salamat", "salamat kaayo"]),
        replies: Replies {
            english: "You're welcome! I'm always here to help you with any questions about our Tourism & Hospitality programs. Feel free to ask me anything! 😊",
            tagalog: "Walang anuman! Palagi akong nandito upang matulungan kayo sa anumang tanong tungkol sa aming Tourism & Hospitality programs. Magsalita lang kayo! 😊",
            bisaya: "Walay sapayan! Kanunay ko dinhi aron matabangan mo sa bisan unsang pangutana bahin sa among Tourism & Hospitality programs. Libre lang mo mangutana! 😊",
        },
    },
    TopicRule {
        topic: Topic::Location,
        trigger: Trigger::Any(&["location", "where", "address", "asa", "saan"]),
        replies: Replies {
            english: "We're located at Saint Joseph College, Maasin City. 📍",
            tagalog: "Nandito kami sa Saint Joseph College, Maasin City. 📍",
            bisaya: "Naa mi sa Saint Joseph College, Maasin City. 📍",
        },
    },
    TopicRule {
        topic: Topic::BstmCurriculum,
        trigger: Trigger::All(&[&["bstm"], &["curriculum", "course", "subject"]]),
        replies: Replies {
            english: "The BSTM curriculum includes comprehensive courses covering tourism management, airline operations, travel agency management, tour guiding techniques, event planning, destination management, and cultural studies. Please contact the department for the complete curriculum details. 📋",
            tagalog: "Ang BSTM curriculum ay may kasamang comprehensive courses na sumasaklaw sa tourism management, airline operations, travel agency management, tour guiding techniques, event planning, destination management, at cultural studies. Pakikontak ang department para sa complete curriculum details. 📋",
            bisaya: "Ang BSTM curriculum naglakip sa comprehensive courses nga nag-cover sa tourism management, airline operations, travel agency management, tour guiding techniques, event planning, destination management, ug cultural studies. Palihug kontaka ang department para sa complete curriculum details. 📋",
        },
    },
];

/// Answer for anything no topic rule recognizes
pub(super) static FALLBACK: TopicRule = TopicRule {
    topic: Topic::Default,
    trigger: Trigger::Always,
    replies: Replies {
        english: "Thank you for your question! I'm here to help you learn more about our Tourism & Hospitality programs at Saint Joseph College. How else can I assist you?\n\nTry asking about:\n• Programs offered\n• Industry partnerships\n• Events and competitions\n• Practical training\n• Career opportunities",
        tagalog: "Salamat sa inyong tanong! Nandito ako upang matulungan kayo sa pag-aaral tungkol sa aming Tourism & Hospitality programs sa Saint Joseph College. Ano pa ang aking matutulong?\n\nSubukan magtanong tungkol sa:\n• Mga programa na inaalok\n• Industry partnerships\n• Events at competitions\n• Practical training\n• Career opportunities",
        bisaya: "Salamat sa inyong pangutana! Naa ko dinhi aron matabangan mo sa pagkat-on bahin sa among Tourism & Hospitality programs sa Saint Joseph College. Unsa pa ang akong matabang?\n\nSulayi pangutana bahin sa:\n• Mga programa nga gihatag\n• Industry partnerships\n• Events ug competitions\n• Practical training\n• Career opportunities",
    },
};
