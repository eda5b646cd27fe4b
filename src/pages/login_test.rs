use super::*;
use crate::config::LOGIN_PATH;

#[test]
fn login_with_notice_appends_flag() {
    assert_eq!(login_with_notice(LOGIN_PATH), "/login?registered=1");
}
