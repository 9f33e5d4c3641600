//! User-facing reply texts. Vietnamese first, English second.

pub const RATE_LINK: &str = "https://telegram.me/storebot?start=envndictbot";

pub const HELP_MSG: &str = "Xin vui lòng gõ từ bạn muốn tra.\n\nPlease type any word to look up.";

pub const BYE_MSG: &str = "Bye!";

pub fn greeting(name: &str) -> String {
    format!(
        "Chào {name}, xin bắt đầu bằng cách gõ bất kỳ từ tiếng Anh muốn tra. \n\
         Hi {name}, please type any English word to look up. \n\n\
         Rate here: 🌟🌟🌟🌟🌟\n{RATE_LINK}\n\n"
    )
}

/// No definition could be found for `word`
pub fn apology(name: &str, word: &str) -> String {
    format!(
        "Xin lỗi {name}, em không biết nghĩa của từ \"{word}\". \n\n\
         Please accept my apology, {name}. I don't know any definition of \"{word}\""
    )
}
