//! Chinese names for calendar values.

/// Heavenly stems, `甲` first.
pub const STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// Earthly branches, `子` first.
pub const BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Zodiac animals in branch order.
pub const ANIMALS: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

/// Chinese numerals; index 0 is `十` so day names can index by `d % 10`.
const NUM_CHINESE: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

const DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// Stem-branch name of a sexagenary order, `1` (甲子) through `60` (癸亥).
///
/// ```
/// use ganzhi_calendar::fmt;
///
/// assert_eq!("甲子", fmt::sexagenary(1));
/// assert_eq!("乙巳", fmt::sexagenary(42));
/// ```
pub fn sexagenary(order: u32) -> String {
    let idx = (order + 59) % 60;
    format!("{}{}", STEMS[(idx % 10) as usize], BRANCHES[(idx % 12) as usize])
}

/// Month name including `月`; months 11 and 12 are `冬月` and `腊月`.
///
/// ```
/// use ganzhi_calendar::fmt;
/// use ganzhi_calendar::lunisolar::Month::*;
///
/// assert_eq!("冬月", fmt::month(Common(11)));
/// assert_eq!("闰正月", fmt::month(Leap(1)));
/// ```
pub fn month(m: crate::lunisolar::Month) -> String {
    let mut name = String::new();
    if m.is_leap() {
        name += "闰";
    }
    name += match m.num() {
        1 => "正",
        n @ 2..=9 => NUM_CHINESE[n as usize],
        10 => "十",
        11 => "冬",
        _ => "腊",
    };
    name += "月";
    name
}

/// Day-of-month name: `初一`..`初十`, `十一`..`二十`, `廿一`..`廿九`, `三十`.
pub fn day(d: u32) -> String {
    let prefix = match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        _ => "三",
    };
    format!("{}{}", prefix, NUM_CHINESE[(d % 10) as usize])
}

/// Year spelled digit by digit, e.g. `一九九九`.
pub fn year(y: i32) -> String {
    y.unsigned_abs()
        .to_string()
        .bytes()
        .map(|b| DIGITS[(b - b'0') as usize])
        .collect()
}

/// Name of a solar term by its longitude slot, `floor(λ / 15°)`; slot 0 is
/// 春分.
pub fn solar_term(slot: u32) -> &'static str {
    const NAMES: [&str; 24] = [
        "春分", "清明", "谷雨", "立夏", "小满", "芒种", "夏至", "小暑", "大暑", "立秋", "处暑",
        "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪", "冬至", "小寒", "大寒", "立春",
        "雨水", "惊蛰",
    ];
    NAMES[(slot % 24) as usize]
}

/// Weekday name without the `星期` prefix; `0` is Sunday (`日`).
pub fn weekday(w: u32) -> &'static str {
    ["日", "一", "二", "三", "四", "五", "六"][(w % 7) as usize]
}

/// Western zodiac sign of a Gregorian month and day.
pub fn constellation(month: u32, day: u32) -> &'static str {
    const STARTS: [u32; 12] = [20, 19, 21, 20, 21, 22, 23, 23, 23, 24, 23, 22];
    const NAMES: [&str; 13] = [
        "摩羯", "水瓶", "双鱼", "白羊", "金牛", "双子", "巨蟹", "狮子", "处女", "天秤", "天蝎",
        "射手", "摩羯",
    ];
    let m = month.clamp(1, 12) as usize;
    if day >= STARTS[m - 1] {
        NAMES[m]
    } else {
        NAMES[m - 1]
    }
}
