// Patient record model
// The app ships with a single hardcoded demo patient; there is no storage
// layer and nothing here is ever written back.

use chrono::NaiveDate;

/// A prescribed medication as shown on the prescription screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Medication {
    pub name: String,
    pub dose: String,
    pub frequency: String,
    pub instructions: Option<String>,
}

/// An upcoming appointment as shown on the main screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    pub date: NaiveDate,
    pub doctor: String,
    pub specialty: String,
    pub motive: String,
}

/// The signed-in patient. Read-only demo data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patient {
    pub name: String,
    pub patient_id: String,
    pub birth_date: NaiveDate,
    pub blood_type: String,
    pub contact: String,
    pub medications: Vec<Medication>,
    pub appointments: Vec<Appointment>,
}

impl Patient {
    /// The bundled demo record.
    pub fn demo() -> Self {
        Self {
            name: "Maria Sanchez".to_string(),
            patient_id: "MX-2041-88".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1987, 3, 12).expect("valid birth date"),
            blood_type: "O+".to_string(),
            contact: "maria.sanchez@example.com".to_string(),
            medications: vec![
                Medication {
                    name: "Metformin".to_string(),
                    dose: "850 mg".to_string(),
                    frequency: "Twice daily".to_string(),
                    instructions: Some("Take with meals".to_string()),
                },
                Medication {
                    name: "Losartan".to_string(),
                    dose: "50 mg".to_string(),
                    frequency: "Once daily".to_string(),
                    instructions: Some("In the morning".to_string()),
                },
                Medication {
                    name: "Atorvastatin".to_string(),
                    dose: "20 mg".to_string(),
                    frequency: "Once daily".to_string(),
                    instructions: Some("At bedtime".to_string()),
                },
            ],
            appointments: vec![
                Appointment {
                    date: NaiveDate::from_ymd_opt(2026, 8, 20).expect("valid date"),
                    doctor: "Dr. Elena Ruiz".to_string(),
                    specialty: "Endocrinology".to_string(),
                    motive: "Quarterly follow-up".to_string(),
                },
                Appointment {
                    date: NaiveDate::from_ymd_opt(2026, 9, 2).expect("valid date"),
                    doctor: "Dr. Tomas Herrera".to_string(),
                    specialty: "Cardiology".to_string(),
                    motive: "Blood pressure review".to_string(),
                },
            ],
        }
    }
}
