/// A notification returned from [`Component::update`](crate::Component::update).
///
/// Widgets in this library mutate their own state synchronously inside
/// `update` and use commands to hand user-visible outcomes back to the host:
/// an immediate message, a batch of messages, or nothing. The host decides
/// how to re-broadcast them (typically by [`map`](Command::map)ping the
/// widget's message type into its own).
///
/// # Examples
///
/// ```rust,ignore
/// // Nothing to report:
/// let cmd = Command::none();
///
/// // Tell the host the derived value changed:
/// let cmd = Command::message(Message::Changed(value));
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Batch(Vec<Command<Msg>>),
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Command {
            inner: CommandInner::None,
        }
    }

    /// Deliver a message to the host immediately.
    pub fn message(msg: Msg) -> Self {
        Command {
            inner: CommandInner::Message(msg),
        }
    }

    /// Deliver several commands together. Empty input collapses to
    /// [`Command::none`]; a single element is unwrapped.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|c| !c.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.pop().unwrap(),
            _ => Command {
                inner: CommandInner::Batch(cmds),
            },
        }
    }

    /// Transform the message type (for component composition).
    pub fn map<NewMsg: Send + 'static>(
        self,
        f: impl Fn(Msg) -> NewMsg + Send + Sync + 'static,
    ) -> Command<NewMsg> {
        self.map_with(&f)
    }

    fn map_with<NewMsg: Send + 'static>(
        self,
        f: &(impl Fn(Msg) -> NewMsg + Send + Sync),
    ) -> Command<NewMsg> {
        match self.inner {
            CommandInner::None => Command::none(),
            CommandInner::Message(msg) => Command::message(f(msg)),
            CommandInner::Batch(cmds) => Command {
                inner: CommandInner::Batch(cmds.into_iter().map(|cmd| cmd.map_with(f)).collect()),
            },
        }
    }

    // --- Inspection methods (useful for testing) ---

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// If this command is an immediate message, return it.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// Flatten this command into the list of messages it carries.
    pub fn into_messages(self) -> Vec<Msg> {
        match self.inner {
            CommandInner::None => vec![],
            CommandInner::Message(msg) => vec![msg],
            CommandInner::Batch(cmds) => {
                cmds.into_iter().flat_map(Command::into_messages).collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_none_is_none() {
        let cmd: Command<()> = Command::none();
        assert!(cmd.is_none());
    }

    #[test]
    fn command_message_carries_payload() {
        let cmd: Command<i32> = Command::message(42);
        assert_eq!(cmd.into_message(), Some(42));
    }

    #[test]
    fn command_batch_empty_returns_none() {
        let cmd: Command<()> = Command::batch(vec![]);
        assert!(cmd.is_none());
    }

    #[test]
    fn command_batch_single_unwraps() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1)]);
        assert_eq!(cmd.into_message(), Some(1));
    }

    #[test]
    fn command_batch_drops_noops() {
        let cmd: Command<i32> = Command::batch(vec![Command::none(), Command::message(7)]);
        assert_eq!(cmd.into_message(), Some(7));
    }

    #[test]
    fn command_map_none() {
        let cmd: Command<i32> = Command::none();
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(mapped.is_none());
    }

    #[test]
    fn command_map_message() {
        let cmd: Command<i32> = Command::message(42);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_message(), Some("42".to_string()));
    }

    #[test]
    fn command_map_batch() {
        let cmd: Command<i32> = Command::batch(vec![Command::message(1), Command::message(2)]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_messages(), vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn into_messages_flattens_nested_batches() {
        let cmd: Command<i32> = Command::batch(vec![
            Command::message(1),
            Command::batch(vec![Command::message(2), Command::message(3)]),
        ]);
        assert_eq!(cmd.into_messages(), vec![1, 2, 3]);
    }
}
