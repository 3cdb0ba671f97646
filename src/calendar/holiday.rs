use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// National holiday entry. Names are kept exactly as published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    pub date: NaiveDate,
    pub name: &'static str,
}

/// 2026 Indonesian national holidays and joint leave days, in publication
/// order. The joint leave (cuti bersama) block was announced separately and
/// sits at the end, so the table itself is not date-sorted.
const TABLE: &[(&str, &str)] = &[
    ("2026-01-01", "Tahun Baru Masehi"),
    ("2026-01-16", "Isra Mi’raj Nabi Muhammad SAW"),
    ("2026-02-17", "Tahun Baru Imlek 2577 Kongzili"),
    ("2026-03-19", "Hari Suci Nyepi (Tahun Baru Saka 1948)"),
    ("2026-03-21", "Idulfitri 1447 H (Hari Pertama)"),
    ("2026-03-22", "Idulfitri 1447 H (Hari Kedua)"),
    ("2026-04-03", "Wafat Yesus Kristus (Jumat Agung)"),
    ("2026-04-05", "Kebangkitan Yesus Kristus (Paskah)"),
    ("2026-05-01", "Hari Buruh Internasional"),
    ("2026-05-14", "Kenaikan Yesus Kristus"),
    ("2026-05-27", "Iduladha 1447 H"),
    ("2026-05-31", "Hari Raya Waisak 2570 BE"),
    ("2026-06-01", "Hari Lahir Pancasila"),
    ("2026-06-16", "1 Muharram Tahun Baru Islam 1448 H"),
    ("2026-08-17", "Hari Kemerdekaan Republik Indonesia"),
    ("2026-08-25", "Maulid Nabi Muhammad SAW"),
    ("2026-12-25", "Hari Raya Natal"),
    ("2026-02-16", "Cuti Bersama Tahun Baru Imlek"),
    ("2026-03-18", "Cuti Bersama Hari Suci Nyepi"),
    ("2026-03-20", "Cuti Bersama Idulfitri 1447 H"),
    ("2026-03-23", "Cuti Bersama Idulfitri 1447 H"),
    ("2026-03-24", "Cuti Bersama Idulfitri 1447 H"),
    ("2026-05-15", "Cuti Bersama Kenaikan Yesus Kristus"),
    ("2026-05-28", "Cuti Bersama Iduladha 1447 H"),
    ("2026-12-24", "Cuti Bersama Natal"),
];

static HOLIDAYS: Lazy<Vec<Holiday>> = Lazy::new(|| {
    TABLE
        .iter()
        .map(|&(date, name)| Holiday {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .expect("holiday table dates are ISO formatted"),
            name,
        })
        .collect()
});

/// Full table in publication order.
pub fn table() -> &'static [Holiday] {
    HOLIDAYS.as_slice()
}

/// Holiday falling on `day`, if any.
pub fn holiday_on(day: NaiveDate) -> Option<&'static Holiday> {
    HOLIDAYS.iter().find(|holiday| holiday.date == day)
}

/// Holidays inside the inclusive day range, ascending by date regardless of
/// table order.
pub fn holidays_in_range(start: NaiveDate, end: NaiveDate) -> Vec<&'static Holiday> {
    let mut matches: Vec<&Holiday> = HOLIDAYS
        .iter()
        .filter(|holiday| holiday.date >= start && holiday.date <= end)
        .collect();
    matches.sort_by_key(|holiday| holiday.date);
    matches
}
