use entitle_domain::{Role, RoleDraft};

use super::*;

impl ApplicationEditor {
    /// Selects a role from the working list for editing.
    ///
    /// The role must currently be in the working list; selecting anything
    /// else is a not-found error.
    pub async fn select_role(&self, role: Role) -> AppResult<()> {
        let known = self
            .roles
            .roles()
            .await
            .iter()
            .any(|entry| entry.code() == role.code());
        if !known {
            return Err(AppError::NotFound(format!(
                "role '{}' is not in the working list",
                role.code().as_str()
            )));
        }

        self.roles.set_selected_role(Some(role)).await;
        Ok(())
    }

    /// Leaves role edit mode without changing the working list.
    pub async fn clear_role_selection(&self) {
        self.roles.set_selected_role(None).await;
    }

    /// Validates the role sub-form and appends or replaces in the working
    /// list.
    ///
    /// With no role selected, a duplicate code (case-sensitive exact match)
    /// is rejected with a conflict, otherwise the role is appended. With a
    /// role selected, the entry keyed by the selected role's original code
    /// is replaced and the selection is cleared; the code itself is
    /// immutable while editing.
    pub async fn add_or_update_role(&self, input: &RoleDraft) -> AppResult<Role> {
        let role = input.validate().map_err(AppError::from)?;

        let Some(original) = self.roles.selected_role().await else {
            let appended = self
                .roles
                .update_roles(|list| {
                    if list.iter().any(|entry| entry.code() == role.code()) {
                        false
                    } else {
                        list.push(role.clone());
                        true
                    }
                })
                .await;

            if !appended {
                self.notifier.notify(Notice::error("Role already exists")).await;
                return Err(AppError::Conflict(format!(
                    "role code '{}' already exists",
                    role.code().as_str()
                )));
            }

            return Ok(role);
        };

        if role.code() != original.code() {
            return Err(AppError::Validation(
                "role code cannot be changed while editing an existing role".to_owned(),
            ));
        }

        self.roles
            .update_roles(|list| {
                if let Some(entry) = list
                    .iter_mut()
                    .find(|entry| entry.code() == original.code())
                {
                    *entry = role.clone();
                }
            })
            .await;
        self.roles.set_selected_role(None).await;

        Ok(role)
    }

    /// Removes a role from the working list after confirmation.
    ///
    /// Clears the role selection when the removed entry was the one being
    /// edited. Dismissing the prompt leaves everything untouched.
    pub async fn remove_role(&self, code: &str, confirmation: Confirmation) -> AppResult<bool> {
        if confirmation == Confirmation::Dismissed {
            return Ok(false);
        }

        let removed = self
            .roles
            .update_roles(|list| {
                let before = list.len();
                list.retain(|entry| entry.code().as_str() != code);
                before != list.len()
            })
            .await;

        if !removed {
            return Err(AppError::NotFound(format!(
                "role '{code}' is not in the working list"
            )));
        }

        let selected = self.roles.selected_role().await;
        if selected.is_some_and(|role| role.code().as_str() == code) {
            self.roles.set_selected_role(None).await;
        }

        Ok(true)
    }
}
