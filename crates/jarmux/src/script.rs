use indoc::formatdoc;

use crate::config::SessionConfig;

/// Renders the restart loop that is fed to `bash -s` inside the new session.
///
/// The loop structure is load-bearing for compatibility: every server exit
/// appends a timestamped record to exit_codes/server_exit_codes.log, then a
/// timed `read` gives a human `wait_secs` seconds to stop the loop before
/// the next launch. There is no restart ceiling.
pub fn render(config: &SessionConfig) -> String {
    formatdoc! {r#"
        cd "{path}"
        JAR="{jar}"; MAXRAM="{max_ram}"; MINRAM="{min_ram}"; TIME={wait_secs}
        while true; do
            java -Xmx$MAXRAM -Xms$MINRAM -jar $JAR nogui
            mkdir -p "exit_codes"
            touch "exit_codes/server_exit_codes.log"
            echo "[$(date +"%d.%m.%Y %T")] ExitCode: $?" >> exit_codes/server_exit_codes.log
            echo "----- Press enter to prevent the server from restarting in $TIME seconds -----"
            read -t $TIME input
            if [ $? == 0 ]; then break; else echo "------------------- SERVER RESTARTS -------------------"; fi
        done
    "#,
        path = config.path.display(),
        jar = config.jar,
        max_ram = config.max_ram,
        min_ram = config.min_ram,
        wait_secs = config.wait_secs,
    }
}
