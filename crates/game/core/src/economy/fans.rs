use crate::config::GameConfig;
use crate::state::FanTiers;

/// Overnight audience decay. Passersby drift away fastest; followers stay put
/// on days the author shared a hobby with them.
pub fn daily_churn(fans: &mut FanTiers, shared_hobby: bool, config: &GameConfig) {
    fans.passerby = (fans.passerby as f64 * config.passerby_retention).floor() as u64;
    if !shared_hobby {
        fans.followers = (fans.followers as f64 * config.follower_retention).floor() as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn churn_decays_passerby_and_followers() {
        let config = GameConfig::default();
        let mut fans = FanTiers {
            passerby: 1000,
            followers: 1000,
            hardcore: 10,
            stans: 5,
        };
        daily_churn(&mut fans, false, &config);
        assert_eq!(fans.passerby, 850);
        assert_eq!(fans.followers, 990);
        assert_eq!(fans.hardcore, 10);
        assert_eq!(fans.stans, 5);
    }

    #[test]
    fn shared_hobby_keeps_followers() {
        let config = GameConfig::default();
        let mut fans = FanTiers {
            passerby: 100,
            followers: 333,
            ..FanTiers::default()
        };
        daily_churn(&mut fans, true, &config);
        assert_eq!(fans.passerby, 85);
        assert_eq!(fans.followers, 333);
    }
}
