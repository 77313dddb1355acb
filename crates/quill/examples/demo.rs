use quill::*;

fn main() {
  println!("Quill output demo\n");

  // Standard logging functions
  info("This is an info message");
  warn("This is a warning message");
  error("This is an error message");
  debug("This is a debug message");
  success("This is a success message");
  verbose("This is a verbose message");

  println!(); // spacing

  // Timestamped events
  event_info("Harvest started");
  event_success("Harvest finished");

  println!(); // spacing

  // Framed milestones
  announce("Atlas server starting up");
  flourish("All records loaded");

  println!(); // spacing

  // Multi-line message test
  let multiline = "This is a multiline message\nwith several lines\nto demonstrate formatting";
  info(multiline);
}
