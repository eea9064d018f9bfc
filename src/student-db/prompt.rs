use std::io::{self, Write, stdin, stdout};

fn is_yes(answer: &str) -> bool {
    answer.trim_end_matches(['\r', '\n']) == "y"
}

pub fn confirm_overwrite() -> io::Result<bool> {
    {
        let mut stdout = stdout().lock();
        stdout.write_all(b"File already exists. Overwrite? (y/n) ")?;
        stdout.flush()?;
    }
    let mut answer = String::with_capacity(4);
    stdin().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

/// Reads the session cookie without echoing it.
pub fn cookie() -> io::Result<String> {
    let cookie = rpassword::prompt_password("enter your browser cookie: ")?;
    Ok(cookie.trim().to_owned())
}
