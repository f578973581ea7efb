/// Nominal NYSE closure dates for a year, in canonical holiday order.
///
/// Weekend holidays keep their nominal date (no observed shift).
pub struct NyseCase {
    pub year: i32,
    pub dates: [&'static str; 10],
}

pub fn nyse_cases() -> Vec<NyseCase> {
    vec![
        NyseCase {
            year: 2023,
            dates: [
                "2023-01-01",
                "2023-01-16",
                "2023-02-20",
                "2023-04-07",
                "2023-05-29",
                "2023-06-19",
                "2023-07-04",
                "2023-09-04",
                "2023-11-23",
                "2023-12-25",
            ],
        },
        NyseCase {
            year: 2024,
            dates: [
                "2024-01-01",
                "2024-01-15",
                "2024-02-19",
                "2024-03-29",
                "2024-05-27",
                "2024-06-19",
                "2024-07-04",
                "2024-09-02",
                "2024-11-28",
                "2024-12-25",
            ],
        },
        NyseCase {
            year: 2025,
            dates: [
                "2025-01-01",
                "2025-01-20",
                "2025-02-17",
                "2025-04-18",
                "2025-05-26",
                "2025-06-19",
                "2025-07-04",
                "2025-09-01",
                "2025-11-27",
                "2025-12-25",
            ],
        },
        NyseCase {
            year: 2026,
            dates: [
                "2026-01-01",
                "2026-01-19",
                "2026-02-16",
                "2026-04-03",
                "2026-05-25",
                "2026-06-19",
                "2026-07-04",
                "2026-09-07",
                "2026-11-26",
                "2026-12-25",
            ],
        },
    ]
}
