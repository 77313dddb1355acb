use quill::*;

#[test]
fn test_basic_logging_functions() {
  // Test that basic logging functions can be called without panicking
  info("Test info message");
  warn("Test warning message");
  error("Test error message");
  debug("Test debug message");
  success("Test success message");
  verbose("Test verbose message");
}

#[test]
fn test_multiline_messages() {
  let multiline_msg = "First line\nSecond line\nThird line";
  info(multiline_msg);
  warn(multiline_msg);
  error(multiline_msg);
}

#[test]
fn test_event_functions() {
  event_info("Event info message");
  event_warn("Event warning message");
  event_error("Event error message");
  event_success("Event success message");
}

#[test]
fn test_framed_output() {
  announce("Announcement message");
  flourish("Flourish message");
}

#[test]
fn test_macros_forward_to_functions() {
  quill::info!("Macro info");
  quill::warn!("Macro warn");
  quill::error!("Macro error");
  quill::debug!("Macro debug");
  quill::success!("Macro success");
  quill::event_info!("Macro event info");
  quill::announce!("Macro announce");
}

#[test]
fn test_rule_lengths() {
  assert_eq!(rule(10, '=').len(), 10);
  assert_eq!(rule(1, '*'), "*");
}
