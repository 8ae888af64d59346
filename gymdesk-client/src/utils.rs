use std::io::Write;

pub fn read_input(label: &str) -> String {
    print!("{label}: ");
    std::io::stdout().flush().expect("Failed to flush stdout");
    let mut value = String::new();
    std::io::stdin()
        .read_line(&mut value)
        .expect("Failed to read from stdin");
    value.trim().to_string()
}

pub fn read_input_hidden(label: &str) -> String {
    rpassword::prompt_password(format!("{label}: ")).expect("Failed to read from stdin")
}
