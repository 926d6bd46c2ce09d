#[cfg(test)]
#[path = "slash_commands_test.rs"]
mod tests;

pub struct SlashCommand {
    command: String,
    pub args: Vec<String>,
}

impl SlashCommand {
    pub fn parse(text: &str) -> Option<SlashCommand> {
        let mut args = text
            .trim()
            .split(' ')
            .map(|e| return e.to_string())
            .collect::<Vec<String>>();
        let prefix = args[0].to_string();
        args.remove(0);

        let cmd = SlashCommand {
            command: prefix,
            args,
        };
        if cmd.is_quit()
            || cmd.is_new_chat()
            || cmd.is_regenerate()
            || cmd.is_like()
            || cmd.is_dislike()
            || cmd.is_copy()
            || cmd.is_upgrade()
            || cmd.is_help()
        {
            return Some(cmd);
        }

        return None;
    }

    pub fn is_quit(&self) -> bool {
        return ["/q", "/quit", "/exit"].contains(&self.command.as_str());
    }

    pub fn is_new_chat(&self) -> bool {
        return ["/n", "/new"].contains(&self.command.as_str());
    }

    pub fn is_regenerate(&self) -> bool {
        return ["/r", "/regenerate"].contains(&self.command.as_str());
    }

    pub fn is_like(&self) -> bool {
        return ["/l", "/like"].contains(&self.command.as_str());
    }

    pub fn is_dislike(&self) -> bool {
        return ["/d", "/dislike"].contains(&self.command.as_str());
    }

    pub fn is_copy(&self) -> bool {
        return ["/c", "/copy"].contains(&self.command.as_str());
    }

    pub fn is_upgrade(&self) -> bool {
        return ["/u", "/upgrade", "/plans"].contains(&self.command.as_str());
    }

    pub fn is_help(&self) -> bool {
        return ["/h", "/help"].contains(&self.command.as_str());
    }

    /// The optional 1-based thread position passed to feedback commands.
    pub fn position_arg(&self) -> Option<usize> {
        let arg = self.args.first()?;
        return arg.parse::<usize>().ok();
    }
}
