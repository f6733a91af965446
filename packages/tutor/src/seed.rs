use tutor_algo::{Difficulty, Question};

use crate::content::ContentBank;

struct SeedQuestion {
    subject: &'static str,
    level: Difficulty,
    text: &'static str,
    answer: SeedAnswer,
    explanation: &'static str,
}

enum SeedAnswer {
    Number(f64),
    Text(&'static str),
}

const SEED_QUESTIONS: &[SeedQuestion] = &[
    SeedQuestion {
        subject: "math",
        level: Difficulty::Easy,
        text: "What is 5 + 7?",
        answer: SeedAnswer::Number(12.0),
        explanation: "Adding 5 and 7 equals 12",
    },
    SeedQuestion {
        subject: "math",
        level: Difficulty::Easy,
        text: "What is 10 - 3?",
        answer: SeedAnswer::Number(7.0),
        explanation: "Subtracting 3 from 10 equals 7",
    },
    SeedQuestion {
        subject: "math",
        level: Difficulty::Medium,
        text: "What is 15 × 4?",
        answer: SeedAnswer::Number(60.0),
        explanation: "Multiplying 15 by 4 equals 60",
    },
    SeedQuestion {
        subject: "math",
        level: Difficulty::Medium,
        text: "What is 72 ÷ 8?",
        answer: SeedAnswer::Number(9.0),
        explanation: "Dividing 72 by 8 equals 9",
    },
    SeedQuestion {
        subject: "math",
        level: Difficulty::Hard,
        text: "What is the square root of 144?",
        answer: SeedAnswer::Number(12.0),
        explanation: "12 × 12 = 144",
    },
    SeedQuestion {
        subject: "math",
        level: Difficulty::Hard,
        text: "What is 3² + 4²?",
        answer: SeedAnswer::Number(25.0),
        explanation: "3² (9) + 4² (16) = 25",
    },
    SeedQuestion {
        subject: "physics",
        level: Difficulty::Easy,
        text: "What is the SI unit of force?",
        answer: SeedAnswer::Text("Newton"),
        explanation: "Force is measured in Newtons (N)",
    },
    SeedQuestion {
        subject: "physics",
        level: Difficulty::Easy,
        text: "What does the formula F = ma represent?",
        answer: SeedAnswer::Text("Newton's Second Law"),
        explanation: "F = ma is Newton's Second Law of Motion",
    },
    SeedQuestion {
        subject: "physics",
        level: Difficulty::Medium,
        text: "Calculate the velocity of an object that traveled 50 meters in 10 seconds",
        answer: SeedAnswer::Number(5.0),
        explanation: "Velocity = distance/time = 50m/10s = 5 m/s",
    },
    SeedQuestion {
        subject: "physics",
        level: Difficulty::Medium,
        text: "What is the gravitational acceleration on Earth?",
        answer: SeedAnswer::Number(9.8),
        explanation: "Gravitational acceleration on Earth is approximately 9.8 m/s²",
    },
    SeedQuestion {
        subject: "physics",
        level: Difficulty::Hard,
        text: "Calculate the kinetic energy of a 2kg object moving at 5 m/s",
        answer: SeedAnswer::Number(25.0),
        explanation: "KE = 0.5 × mass × velocity² = 0.5 × 2 × 5² = 25 Joules",
    },
    SeedQuestion {
        subject: "physics",
        level: Difficulty::Hard,
        text: "If work done is 100J and distance is 20m, what is the force applied?",
        answer: SeedAnswer::Number(5.0),
        explanation: "Work = Force × Distance, so Force = Work/Distance = 100J/20m = 5N",
    },
    SeedQuestion {
        subject: "chemistry",
        level: Difficulty::Easy,
        text: "What is the chemical symbol for water?",
        answer: SeedAnswer::Text("H2O"),
        explanation: "Water is composed of 2 hydrogen atoms and 1 oxygen atom",
    },
    SeedQuestion {
        subject: "chemistry",
        level: Difficulty::Easy,
        text: "What is the atomic number of oxygen?",
        answer: SeedAnswer::Number(8.0),
        explanation: "Oxygen has 8 protons in its nucleus",
    },
    SeedQuestion {
        subject: "chemistry",
        level: Difficulty::Medium,
        text: "What is the pH of pure water at 25°C?",
        answer: SeedAnswer::Number(7.0),
        explanation: "Pure water has a neutral pH of 7",
    },
    SeedQuestion {
        subject: "chemistry",
        level: Difficulty::Medium,
        text: "What gas is produced when an acid reacts with a carbonate?",
        answer: SeedAnswer::Text("Carbon dioxide"),
        explanation: "Acid + Carbonate → Salt + Water + Carbon Dioxide",
    },
    SeedQuestion {
        subject: "chemistry",
        level: Difficulty::Hard,
        text: "Balance this equation: __ Fe + __ O2 → __ Fe2O3",
        answer: SeedAnswer::Text("4 Fe + 3 O2 → 2 Fe2O3"),
        explanation: "Balanced equation requires 4 iron atoms and 3 oxygen molecules",
    },
    SeedQuestion {
        subject: "chemistry",
        level: Difficulty::Hard,
        text: "Calculate the molarity of a solution with 4 moles of solute in 2 liters of solution",
        answer: SeedAnswer::Number(2.0),
        explanation: "Molarity = moles of solute/volume of solution in liters = 4 moles/2 L = 2 M",
    },
];

pub fn builtin_bank() -> ContentBank {
    let mut bank = ContentBank::new();
    for seed in SEED_QUESTIONS {
        let question = match seed.answer {
            SeedAnswer::Number(n) => Question::new(seed.text, n, seed.explanation),
            SeedAnswer::Text(s) => Question::new(seed.text, s, seed.explanation),
        };
        bank.add_questions(seed.subject, seed.level, vec![question]);
    }
    tracing::debug!(questions = bank.question_count(), "seeded built-in content bank");
    bank
}
