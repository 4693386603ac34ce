//! Sexagenary (stem-branch) orders of the four pillars.
//!
//! All orders are 1-based: `1` is 甲子 and `60` is 癸亥.

/// Order of the stem-branch year `year`, where a ganzhi year opens at 立春.
///
/// ```
/// use ganzhi_calendar::sexagenary::year_order;
///
/// assert_eq!(1, year_order(1984)); // 甲子
/// assert_eq!(17, year_order(2000)); // 庚辰
/// ```
pub fn year_order(year: i32) -> u32 {
    (year - 4).rem_euclid(60) as u32 + 1
}

/// Index of the solar month at sun longitude `longitude`, `0` for the 寅
/// month opened by 立春 (315°) through `11` for the 丑 month opened by 小寒.
pub fn month_index(longitude: f64) -> u32 {
    ((longitude - 315.0).rem_euclid(360.0) / 30.0).floor() as u32 % 12
}

/// Order of the month pillar; the 寅 month's stem follows the year stem
/// (甲/己 → 丙寅, 乙/庚 → 戊寅, 丙/辛 → 庚寅, 丁/壬 → 壬寅, 戊/癸 → 甲寅).
pub fn month_order(year_order: u32, month_index: u32) -> u32 {
    let stem = (year_order - 1) % 10;
    ((stem % 5) * 12 + 2 + month_index) % 60 + 1
}

/// Branch index of a civil hour, `0` (子, 23:00–00:59) through `11` (亥).
pub fn hour_branch(hour: u32) -> u32 {
    (hour + 1) / 2 % 12
}

/// Order of the hour pillar; the 子 hour's stem follows the day stem
/// (甲/己 → 甲子, 乙/庚 → 丙子, 丙/辛 → 戊子, 丁/壬 → 庚子, 戊/癸 → 壬子).
pub fn hour_order(day_order: u32, hour_branch: u32) -> u32 {
    let stem = (day_order - 1) % 10;
    ((stem % 5) * 12 + hour_branch) % 60 + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::sexagenary;

    #[test]
    fn years() {
        assert_eq!("己卯", sexagenary(year_order(1999)));
        assert_eq!("甲辰", sexagenary(year_order(2024)));
        assert_eq!("辛丑", sexagenary(year_order(1901)));
    }

    #[test]
    fn month_indices() {
        assert_eq!(0, month_index(315.0));
        assert_eq!(11, month_index(314.99));
        assert_eq!(10, month_index(280.3));
        assert_eq!(11, month_index(285.0));
        assert_eq!(1, month_index(345.5));
        assert_eq!(2, month_index(15.0));
    }

    #[test]
    fn months_follow_year_stem() {
        // 己卯 year: 寅 month is 丙寅, 子 month 丙子
        let y = year_order(1999);
        assert_eq!("丙寅", sexagenary(month_order(y, 0)));
        assert_eq!("丙子", sexagenary(month_order(y, 10)));
        assert_eq!("丁丑", sexagenary(month_order(y, 11)));
        // 甲辰 year opens with 丙寅
        assert_eq!("丙寅", sexagenary(month_order(year_order(2024), 0)));
        // 庚辰 year opens with 戊寅
        assert_eq!("戊寅", sexagenary(month_order(year_order(2000), 0)));
    }

    #[test]
    fn hour_branches() {
        assert_eq!(0, hour_branch(23));
        assert_eq!(0, hour_branch(0));
        assert_eq!(1, hour_branch(1));
        assert_eq!(1, hour_branch(2));
        assert_eq!(6, hour_branch(12));
        assert_eq!(11, hour_branch(22));
    }

    #[test]
    fn hours_follow_day_stem() {
        // 戊午 day (order 55): 子 hour is 壬子
        assert_eq!("壬子", sexagenary(hour_order(55, 0)));
        // 甲子 day: 子 hour is 甲子, 午 hour is 庚午
        assert_eq!("甲子", sexagenary(hour_order(1, 0)));
        assert_eq!("庚午", sexagenary(hour_order(1, 6)));
    }
}
