use super::*;

/// Unix-second bounds of the stories a feed run covers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Window {
  pub(crate) end: i64,
  pub(crate) start: i64,
}

impl Window {
  /// The twelve hours ending at the most recent anchor that is at least
  /// twelve hours old. Before noon that is yesterday's `hour` to yesterday's
  /// `hour + 12`; from noon on it is yesterday's `hour + 12` to today's `hour`.
  /// Anchors are wall-clock times in the zone of `now`.
  pub(crate) fn anchored(
    now: DateTime<Tz>,
    hour: u32,
    minute: u32,
  ) -> Result<Self> {
    let zone = now.timezone();

    let today = now.date_naive();

    let yesterday = today
      .pred_opt()
      .with_context(|| format!("no day before {today}"))?;

    let (start, end) = if now.hour() < 12 {
      (
        at(zone, yesterday, hour, minute)?,
        at(zone, yesterday, hour + 12, minute)?,
      )
    } else {
      (
        at(zone, yesterday, hour + 12, minute)?,
        at(zone, today, hour, minute)?,
      )
    };

    debug!(from = %start, to = %end, "computed search window");

    Self::new(start.timestamp(), end.timestamp())
  }

  pub(crate) fn new(start: i64, end: i64) -> Result<Self> {
    ensure!(
      start < end,
      "search window must start before it ends, got {start}..{end}"
    );

    Ok(Self { end, start })
  }

  pub(crate) fn trailing(config: &Config) -> Result<Self> {
    let now = Utc::now().with_timezone(&config.timezone);

    Self::anchored(now, config.window_hour, config.window_minute)
  }
}

fn at(
  zone: Tz,
  date: NaiveDate,
  hour: u32,
  minute: u32,
) -> Result<DateTime<Tz>> {
  date
    .and_hms_opt(hour, minute, 0)
    .and_then(|naive| naive.and_local_timezone(zone).earliest())
    .with_context(|| format!("{date} has no time {hour:02}:{minute:02}"))
}

#[cfg(test)]
mod tests {
  use {
    super::*,
    chrono::{Datelike, TimeZone},
    chrono_tz::America::New_York,
  };

  fn time(day: u32, hour: u32, minute: u32) -> DateTime<Tz> {
    New_York
      .with_ymd_and_hms(2024, 3, day, hour, minute, 0)
      .unwrap()
  }

  fn utc(month: u32, day: u32, hour: u32) -> i64 {
    Utc
      .with_ymd_and_hms(2024, month, day, hour, 0, 0)
      .unwrap()
      .timestamp()
  }

  #[test]
  fn morning_covers_yesterday_daytime() {
    let window = Window::anchored(time(15, 8, 30), 10, 0).unwrap();

    assert_eq!(window.start, time(14, 10, 0).timestamp());
    assert_eq!(window.end, time(14, 22, 0).timestamp());
  }

  #[test]
  fn evening_covers_last_night() {
    let window = Window::anchored(time(15, 20, 30), 10, 0).unwrap();

    assert_eq!(window.start, time(14, 22, 0).timestamp());
    assert_eq!(window.end, time(15, 10, 0).timestamp());
  }

  #[test]
  fn always_twelve_hours_on_the_anchor_minute() {
    for hour in 0..24 {
      let now = New_York
        .with_ymd_and_hms(2024, 3, 15, hour, 47, 13)
        .unwrap();

      let window = Window::anchored(now, 10, 15).unwrap();

      assert_eq!(window.end - window.start, 12 * 3600);
      assert!(window.end <= now.timestamp());

      for bound in [window.start, window.end] {
        let bound = DateTime::from_timestamp(bound, 0)
          .unwrap()
          .with_timezone(&New_York);

        assert_eq!(bound.minute(), 15);
        assert_eq!(bound.second(), 0);
      }
    }
  }

  #[test]
  fn follows_daylight_saving_time() {
    let summer = New_York.with_ymd_and_hms(2024, 7, 15, 8, 30, 0).unwrap();

    let window = Window::anchored(summer, 10, 0).unwrap();

    assert_eq!(window.start, utc(7, 14, 14));
    assert_eq!(window.end, utc(7, 15, 2));

    let winter = New_York.with_ymd_and_hms(2024, 1, 15, 8, 30, 0).unwrap();

    let window = Window::anchored(winter, 10, 0).unwrap();

    assert_eq!(window.start, utc(1, 14, 15));
    assert_eq!(window.end, utc(1, 15, 3));
  }

  #[test]
  fn crosses_month_boundaries() {
    let window = Window::anchored(time(1, 9, 0), 10, 0).unwrap();

    let start = DateTime::from_timestamp(window.start, 0)
      .unwrap()
      .with_timezone(&New_York);

    assert_eq!((start.month(), start.day(), start.hour()), (2, 29, 10));
  }

  #[test]
  fn new_rejects_inverted_bounds() {
    assert!(Window::new(200, 100).is_err());
    assert!(Window::new(100, 100).is_err());
    assert_eq!(Window::new(100, 200).unwrap(), Window { end: 200, start: 100 });
  }

  #[test]
  fn trailing_uses_configured_anchor() {
    let window = Window::trailing(&Config::default()).unwrap();

    assert_eq!(window.end - window.start, 12 * 3600);
    assert!(window.end <= Utc::now().timestamp());
  }
}
