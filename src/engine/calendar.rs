// ==========================================
// 设备预防性维护排程系统 - ISO 周历引擎
// ==========================================
// 职责: 日历日期 ↔ (ISO年, ISO周) 的纯函数换算
// 依据: ISO 8601 周编号 (含首个星期四的周为第 1 周)
// 红线: 年末/年初日期会滚入相邻 ISO 年, 不得按日历年直切
// ==========================================

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::domain::types::IsoWeek;
use crate::engine::error::{EngineError, EngineResult};

// ==========================================
// 周数与星期常量
// ==========================================

/// ISO 周的天数
pub const DAYS_PER_WEEK: i64 = 7;

// ==========================================
// 年度周数
// ==========================================

/// 计算指定 ISO 年的周数 (52 或 53)
///
/// 规则: 1 月 1 日为星期四, 或闰年且 1 月 1 日为星期三时为长年。
/// 等价于 "12 月 28 日所在周即最后一周" 的判定, 纯整数运算,
/// 对任意年份不会失败。
pub fn weeks_in_year(iso_year: i32) -> u32 {
    // p(y): 公历 y 年 12 月 31 日的星期偏移 (0=周日基准的经典同余式)
    fn p(y: i64) -> i64 {
        (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)).rem_euclid(7)
    }
    let y = iso_year as i64;
    if p(y) == 4 || p(y - 1) == 3 {
        53
    } else {
        52
    }
}

// ==========================================
// 日期 → ISO 周
// ==========================================

/// 计算日期所属的 (ISO年, ISO周)
///
/// 星期四规则: 任一日期与其所在周的星期四同属一个 ISO 年,
/// 周序号即该星期四在年内的序数周
pub fn week_of(date: NaiveDate) -> IsoWeek {
    let to_thursday = 4 - date.weekday().number_from_monday() as i64;
    let thursday = date + Duration::days(to_thursday);
    IsoWeek {
        iso_year: thursday.year(),
        week: thursday.ordinal0() / 7 + 1,
    }
}

// ==========================================
// ISO 周 → 日期
// ==========================================

/// 计算指定 ISO 周的星期一
///
/// 算法: 定位该 ISO 年的首个星期四, 按整周偏移, 再回退 3 天。
/// 周序号越界 (0 或超过当年周数) 返回 CalendarArithmetic。
pub fn monday_of(slot: IsoWeek) -> EngineResult<NaiveDate> {
    let total = weeks_in_year(slot.iso_year);
    if slot.week == 0 || slot.week > total {
        return Err(EngineError::CalendarArithmetic(format!(
            "周序号越界: {} (当年共 {} 周)",
            slot, total
        )));
    }
    let jan1 = NaiveDate::from_ymd_opt(slot.iso_year, 1, 1).ok_or_else(|| {
        EngineError::CalendarArithmetic(format!("年份超出可表示范围: {}", slot.iso_year))
    })?;
    let to_thursday =
        (Weekday::Thu.number_from_monday() as i64 - jan1.weekday().number_from_monday() as i64)
            .rem_euclid(DAYS_PER_WEEK);
    let first_thursday = jan1 + Duration::days(to_thursday);
    // 周 53 仍在同一日历年 ± 3 天内, 不会溢出
    Ok(first_thursday + Duration::days((slot.week as i64 - 1) * DAYS_PER_WEEK - 3))
}

/// 计算指定 ISO 周内某个星期几的日期
///
/// # 参数
/// - `weekday`: 1=星期一 .. 7=星期日, 越界返回 InvalidScheduleInput
pub fn target_date(slot: IsoWeek, weekday: u32) -> EngineResult<NaiveDate> {
    if !(1..=7).contains(&weekday) {
        return Err(EngineError::InvalidScheduleInput(format!(
            "星期序号越界: {weekday} (合法范围 1..=7)"
        )));
    }
    Ok(monday_of(slot)? + Duration::days(weekday as i64 - 1))
}

// ==========================================
// 周区间运算
// ==========================================

/// 计算两个 ISO 周之间的整周跨度 (to - from, 可为负)
///
/// 纯整数运算: 逐年累加周数, 再补周序号差
pub fn weeks_between(from: IsoWeek, to: IsoWeek) -> i64 {
    if to < from {
        return -weeks_between(to, from);
    }
    let mut total: i64 = 0;
    let mut year = from.iso_year;
    while year < to.iso_year {
        total += weeks_in_year(year) as i64;
        year += 1;
    }
    total + to.week as i64 - from.week as i64
}

/// 指定 ISO 周的下一周 (跨年自动进位)
pub fn next_week(slot: IsoWeek) -> IsoWeek {
    if slot.week < weeks_in_year(slot.iso_year) {
        IsoWeek::new(slot.iso_year, slot.week + 1)
    } else {
        IsoWeek::new(slot.iso_year + 1, 1)
    }
}

/// 指定 ISO 年的最后一周
pub fn last_week_of(iso_year: i32) -> IsoWeek {
    IsoWeek::new(iso_year, weeks_in_year(iso_year))
}

// ==========================================
// WeekRange - 闭区间周迭代器
// ==========================================
pub struct WeekRange {
    cursor: Option<IsoWeek>,
    end: IsoWeek,
}

/// 迭代 [from, to] 闭区间内的全部 ISO 周
///
/// from > to 时产生空迭代
pub fn iter_weeks(from: IsoWeek, to: IsoWeek) -> WeekRange {
    WeekRange {
        cursor: if from <= to { Some(from) } else { None },
        end: to,
    }
}

impl Iterator for WeekRange {
    type Item = IsoWeek;

    fn next(&mut self) -> Option<IsoWeek> {
        let cur = self.cursor?;
        self.cursor = if cur < self.end {
            Some(next_week(cur))
        } else {
            None
        };
        Some(cur)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weeks_in_year_known_values() {
        // 长年: 1 月 1 日为周四 (2015, 2026), 或闰年且 1 月 1 日为周三 (2020)
        assert_eq!(weeks_in_year(2015), 53);
        assert_eq!(weeks_in_year(2020), 53);
        assert_eq!(weeks_in_year(2026), 53);
        assert_eq!(weeks_in_year(2023), 52);
        assert_eq!(weeks_in_year(2024), 52);
        assert_eq!(weeks_in_year(2025), 52);
    }

    #[test]
    fn test_week_of_year_boundary_rollover() {
        // 2024-12-30 (周一) 滚入 2025 年第 1 周
        assert_eq!(week_of(date(2024, 12, 30)), IsoWeek::new(2025, 1));
        // 2027-01-01 (周五) 滚回 2026 年第 53 周
        assert_eq!(week_of(date(2027, 1, 1)), IsoWeek::new(2026, 53));
        // 2021-01-01 (周五) 滚回 2020 年第 53 周
        assert_eq!(week_of(date(2021, 1, 1)), IsoWeek::new(2020, 53));
    }

    #[test]
    fn test_monday_of_known_values() {
        // 2015 年 1 月 1 日即首个周四 → W01 周一为 2014-12-29
        assert_eq!(monday_of(IsoWeek::new(2015, 1)).unwrap(), date(2014, 12, 29));
        // 2020 年 W53 周一为 2020-12-28
        assert_eq!(monday_of(IsoWeek::new(2020, 53)).unwrap(), date(2020, 12, 28));
        // 2026 年 W53 不溢出
        assert_eq!(monday_of(IsoWeek::new(2026, 53)).unwrap(), date(2026, 12, 28));
    }

    #[test]
    fn test_monday_of_out_of_range() {
        assert!(monday_of(IsoWeek::new(2025, 0)).is_err());
        // 2025 年只有 52 周
        assert!(monday_of(IsoWeek::new(2025, 53)).is_err());
        assert!(monday_of(IsoWeek::new(2026, 54)).is_err());
    }

    #[test]
    fn test_target_date() {
        let w = IsoWeek::new(2025, 10);
        let monday = monday_of(w).unwrap();
        assert_eq!(target_date(w, 1).unwrap(), monday);
        assert_eq!(target_date(w, 7).unwrap(), monday + Duration::days(6));
        assert!(target_date(w, 0).is_err());
        assert!(target_date(w, 8).is_err());
    }

    #[test]
    fn test_weeks_between_cross_year() {
        let from = IsoWeek::new(2024, 40);
        let to = IsoWeek::new(2026, 53);
        // (52-40) + 52 + 53 = 117
        assert_eq!(weeks_between(from, to), 117);
        assert_eq!(weeks_between(to, from), -117);
        assert_eq!(weeks_between(from, from), 0);
    }

    #[test]
    fn test_iter_weeks_spans_boundary() {
        let weeks: Vec<IsoWeek> =
            iter_weeks(IsoWeek::new(2025, 51), IsoWeek::new(2026, 2)).collect();
        assert_eq!(
            weeks,
            vec![
                IsoWeek::new(2025, 51),
                IsoWeek::new(2025, 52),
                IsoWeek::new(2026, 1),
                IsoWeek::new(2026, 2),
            ]
        );
        assert_eq!(iter_weeks(IsoWeek::new(2026, 2), IsoWeek::new(2025, 51)).count(), 0);
    }
}
