use super::message::{Message, MessageContent};
use crate::config::Config;
use crate::error::ProtocolError;
use crate::session::Session;
use crate::workspace::SAMPLE_PROGRAMS;
use serde_json::{json, Value};
use std::io::{self, BufRead, Read, Write};
use tracing::{debug, info, warn};

const CONTENT_LENGTH: &str = "Content-Length:";

/// Largest frame body accepted; bigger frames are rejected unread.
pub const MAX_FRAME: usize = 16 << 20;

/// Serves one front end over `Content-Length` framed JSON.
pub struct ProtocolServer<R, W> {
    reader: R,
    writer: W,
    seq: u64,
    session: Session,
}

impl<R: BufRead, W: Write> ProtocolServer<R, W> {
    pub fn new(reader: R, writer: W, session: Session) -> Self {
        Self {
            reader,
            writer,
            seq: 0,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn send_message(&mut self, msg: &Message) -> Result<(), ProtocolError> {
        let json = serde_json::to_string(msg)?;
        // Exactly "Content-Length: {len}\r\n\r\n{json}"
        write!(self.writer, "Content-Length: {}\r\n\r\n{}", json.len(), json)?;
        self.writer.flush()?;
        debug!(bytes = json.len(), "sent message");
        Ok(())
    }

    pub fn send_response(
        &mut self,
        request_seq: u64,
        command: String,
        success: bool,
        message: Option<String>,
        body: Option<Value>,
    ) -> Result<(), ProtocolError> {
        let msg = Message {
            seq: self.next_seq(),
            content: MessageContent::Response {
                request_seq,
                success,
                command,
                message,
                body,
            },
        };
        self.send_message(&msg)
    }

    pub fn send_event(&mut self, event: &str, body: Option<Value>) -> Result<(), ProtocolError> {
        let msg = Message {
            seq: self.next_seq(),
            content: MessageContent::Event {
                event: event.to_string(),
                body,
            },
        };
        self.send_message(&msg)
    }

    /// Read one frame. `Ok(None)` on a clean end of stream.
    ///
    /// The header marker is searched for anywhere in the line: after a
    /// frame is rejected its unread body runs into the next header line,
    /// and the next frame must still be found.
    pub fn read_message(&mut self) -> Result<Option<Message>, ProtocolError> {
        let mut content_length = None;
        let mut saw_header = false;

        loop {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim_end_matches(['\r', '\n']);
            if line.is_empty() {
                if saw_header {
                    break;
                }
                continue;
            }
            saw_header = true;
            if let Some(pos) = line.find(CONTENT_LENGTH) {
                content_length = line[pos + CONTENT_LENGTH.len()..]
                    .trim()
                    .parse::<usize>()
                    .ok();
            }
        }

        let len = content_length.ok_or(ProtocolError::MissingContentLength)?;
        if len > MAX_FRAME {
            return Err(ProtocolError::FrameTooLarge(len));
        }

        let mut buffer = Vec::with_capacity(len);
        Read::take(self.reader.by_ref(), len as u64).read_to_end(&mut buffer)?;
        if buffer.len() < len {
            return Err(ProtocolError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stream ended inside a frame body",
            )));
        }
        Ok(Some(serde_json::from_slice(&buffer)?))
    }

    /// Serve until `disconnect` or end of input.
    pub fn run(&mut self) -> Result<(), ProtocolError> {
        loop {
            match self.read_message() {
                Ok(Some(msg)) => {
                    if !self.dispatch(msg)? {
                        break;
                    }
                }
                Ok(None) => {
                    info!("client closed the stream");
                    break;
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => warn!(error = %e, "skipping malformed frame"),
            }
        }
        Ok(())
    }

    /// Returns `false` once the client has disconnected.
    fn dispatch(&mut self, msg: Message) -> Result<bool, ProtocolError> {
        let (command, arguments) = match msg.content {
            MessageContent::Request { command, arguments } => (command, arguments),
            other => {
                debug!(?other, "ignoring non-request message");
                return Ok(true);
            }
        };
        debug!(seq = msg.seq, %command, "received request");

        match command.as_str() {
            "disconnect" => {
                self.send_response(msg.seq, command, true, None, None)?;
                return Ok(false);
            }
            "compile" => {
                self.handle_compile(msg.seq, command)?;
                return Ok(true);
            }
            _ => {}
        }

        match self.handle_request(&command, arguments.as_ref()) {
            Ok(body) => {
                let initialized = command == "initialize";
                self.send_response(msg.seq, command, true, None, Some(body))?;
                if initialized {
                    self.send_event("initialized", None)?;
                }
            }
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                warn!(%command, error = %e, "request failed");
                self.send_response(msg.seq, command, false, Some(e.to_string()), None)?;
            }
        }
        Ok(true)
    }

    fn handle_compile(&mut self, seq: u64, command: String) -> Result<(), ProtocolError> {
        info!(file = self.session.workspace().current(), "compile requested");
        let result = self.session.compile_and_run();
        let body = serde_json::to_value(&result)?;
        self.send_response(seq, command, true, None, Some(body))?;

        let lines = self.session.console().lines().to_vec();
        self.send_event(
            "output",
            Some(json!({ "category": "console", "lines": lines })),
        )
    }

    fn buffer_body(&self) -> Value {
        json!({
            "name": self.session.workspace().current(),
            "content": self.session.buffer().text(),
        })
    }

    fn handle_request(&mut self, command: &str, args: Option<&Value>) -> Result<Value, ProtocolError> {
        match command {
            "initialize" => {
                if let Some(ms) = args
                    .and_then(|a| a.get("compileDelayMs"))
                    .and_then(Value::as_u64)
                {
                    self.session.set_config(Config::with_delay_ms(ms));
                }
                Ok(json!({
                    "supportsCompile": true,
                    "supportsExamples": true,
                    "compileDelayMs": self.session.config().compile_delay.as_millis() as u64,
                }))
            }
            "listFiles" => {
                let ws = self.session.workspace();
                Ok(json!({
                    "files": ws.names().collect::<Vec<_>>(),
                    "current": ws.current(),
                    "fileCount": ws.file_count_label(),
                }))
            }
            "openFile" => {
                self.session.switch_to(str_arg(args, "name")?)?;
                Ok(self.buffer_body())
            }
            "createFile" => {
                self.session.new_file(str_arg(args, "name")?)?;
                Ok(self.buffer_body())
            }
            "deleteFile" => {
                self.session.delete(str_arg(args, "name")?)?;
                Ok(json!({ "current": self.session.workspace().current() }))
            }
            "updateBuffer" => {
                self.session.edit(str_arg(args, "content")?);
                Ok(json!({}))
            }
            "saveFile" => Ok(json!({ "name": self.session.save() })),
            "listExamples" => {
                let names: Vec<&str> = SAMPLE_PROGRAMS.iter().map(|s| s.name).collect();
                Ok(json!({ "examples": names }))
            }
            "loadExample" => {
                let index = usize_arg(args, "index")?;
                let name = self.session.load_example(index)?;
                Ok(json!({ "name": name, "content": self.session.buffer().text() }))
            }
            "cursor" => {
                let offset = usize_arg(args, "offset")?;
                let buffer = self.session.buffer_mut();
                buffer.set_caret(offset);
                let (line, column) = buffer.cursor_position();
                Ok(json!({ "line": line, "column": column, "label": buffer.cursor_label() }))
            }
            "status" => Ok(json!({ "status": self.session.status() })),
            "clearConsole" => {
                self.session.clear_console();
                Ok(json!({ "lines": self.session.console().lines() }))
            }
            other => Err(ProtocolError::UnknownCommand(other.to_string())),
        }
    }
}

fn str_arg<'a>(args: Option<&'a Value>, key: &'static str) -> Result<&'a str, ProtocolError> {
    args.and_then(|a| a.get(key))
        .and_then(Value::as_str)
        .ok_or(ProtocolError::MissingArgument(key))
}

fn usize_arg(args: Option<&Value>, key: &'static str) -> Result<usize, ProtocolError> {
    args.and_then(|a| a.get(key))
        .and_then(Value::as_u64)
        .and_then(|n| usize::try_from(n).ok())
        .ok_or(ProtocolError::MissingArgument(key))
}
