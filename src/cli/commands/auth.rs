use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let ctx = Context::open(cfg)?;
    let store = ctx.store();
    let auth = ctx.auth(&store);

    match cmd {
        Commands::Signup {
            email,
            password,
            confirm,
        } => {
            let user = auth.sign_up(email, password, confirm)?;
            ctx.log("signup", &user.email, "Account created");
            success(format!("Account created for {}", user.email));
            info("Run `workhours login` to sign in.");
        }

        Commands::Login { email, password } => {
            if let Some(current) = auth.current_user()? {
                info(format!("Already signed in as {}", current.email));
                return Ok(());
            }

            let user = auth.sign_in(email, password)?;
            ctx.log("login", &user.email, "Signed in");
            success(format!("Signed in as {}", user.email));
        }

        Commands::Logout => match auth.current_user()? {
            Some(user) => {
                auth.sign_out()?;
                ctx.log("logout", &user.email, "Signed out");
                success("Signed out");
            }
            None => info("Not signed in"),
        },

        Commands::Whoami => {
            let user = auth.current_user()?.ok_or(AppError::NotSignedIn)?;
            println!("{}", user.email);
        }

        _ => {}
    }

    Ok(())
}
